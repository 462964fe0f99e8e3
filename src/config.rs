//! Environment-based configuration.
//!
//! Vault connection details are required; everything else has a default.
//! Settings are resolved once per run, before any network call is made.

use std::env;

use crate::constants;
use crate::errors::LookupError;

/// Connection settings for Vault and GitHub.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base address of the Vault server, e.g. `http://127.0.0.1:8200`.
    pub vault_addr: String,
    /// Token used to authenticate against Vault.
    pub vault_token: String,
    /// KV v2 mount point holding the GitHub secret.
    pub kv_mount: String,
    /// Path of the secret under the mount.
    pub secret_path: String,
    /// Field inside the secret that holds the GitHub token.
    pub secret_key: String,
    /// Base URL of the GitHub REST API.
    pub github_api_url: String,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Configuration`] if `VAULT_ADDR` or `VAULT_TOKEN`
    /// is unset or blank.
    pub fn from_env() -> Result<Self, LookupError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LookupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            non_blank(lookup(name)).ok_or_else(|| {
                LookupError::Configuration(format!("{name} environment variable not set"))
            })
        };
        let optional =
            |name: &str, default: &str| non_blank(lookup(name)).unwrap_or_else(|| default.to_string());

        Ok(Self {
            vault_addr: required(constants::env::VAULT_ADDR)?
                .trim_end_matches('/')
                .to_string(),
            vault_token: required(constants::env::VAULT_TOKEN)?,
            kv_mount: optional(
                constants::env::VAULT_KV_MOUNT,
                constants::vault::DEFAULT_KV_MOUNT,
            )
            .trim_matches('/')
            .to_string(),
            secret_path: optional(
                constants::env::VAULT_SECRET_PATH,
                constants::vault::DEFAULT_SECRET_PATH,
            )
            .trim_matches('/')
            .to_string(),
            secret_key: optional(
                constants::env::VAULT_SECRET_KEY,
                constants::vault::DEFAULT_SECRET_KEY,
            ),
            github_api_url: optional(constants::env::GITHUB_API_URL, constants::api::DEFAULT_BASE_URL),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("VAULT_ADDR", "http://127.0.0.1:8200/"),
            ("VAULT_TOKEN", "hvs.test"),
        ]))
        .unwrap();

        assert_eq!(settings.vault_addr, "http://127.0.0.1:8200");
        assert_eq!(settings.vault_token, "hvs.test");
        assert_eq!(settings.kv_mount, "secret");
        assert_eq!(settings.secret_path, "github");
        assert_eq!(settings.secret_key, "token");
        assert_eq!(settings.github_api_url, "https://api.github.com");
    }

    #[test]
    fn test_settings_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("VAULT_ADDR", "https://vault.internal"),
            ("VAULT_TOKEN", "hvs.test"),
            ("VAULT_KV_MOUNT", "/kv/"),
            ("VAULT_SECRET_PATH", "ci/github"),
            ("VAULT_SECRET_KEY", "pat"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
        ]))
        .unwrap();

        assert_eq!(settings.kv_mount, "kv");
        assert_eq!(settings.secret_path, "ci/github");
        assert_eq!(settings.secret_key, "pat");
        assert_eq!(settings.github_api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_settings_missing_vault_token() {
        let err = Settings::from_lookup(lookup_from(&[("VAULT_ADDR", "http://127.0.0.1:8200")]))
            .unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
        assert!(err.to_string().contains("VAULT_TOKEN"));
    }

    #[test]
    fn test_settings_blank_vault_addr() {
        let err = Settings::from_lookup(lookup_from(&[
            ("VAULT_ADDR", "   "),
            ("VAULT_TOKEN", "hvs.test"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("VAULT_ADDR"));
    }
}

//! Vault KV v2 client supplying the GitHub token.

use std::collections::HashMap;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::constants;
use crate::errors::LookupError;

#[derive(Debug, Deserialize)]
struct KvReadResponse {
    data: KvData,
}

#[derive(Debug, Deserialize)]
struct KvData {
    /// `null` when the latest version was deleted or destroyed.
    data: Option<HashMap<String, Value>>,
}

#[derive(Debug, Deserialize, Default)]
struct VaultErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

pub struct VaultClient {
    http: Client,
    addr: String,
    token: String,
    mount: String,
}

impl VaultClient {
    pub fn new(addr: String, token: String, mount: String) -> Result<Self, LookupError> {
        let http = Client::builder()
            .user_agent(constants::USER_AGENT)
            .build()
            .map_err(|e| LookupError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(http, addr, token, mount))
    }

    pub fn with_client(http: Client, addr: String, token: String, mount: String) -> Self {
        Self {
            http,
            addr: addr.trim_end_matches('/').to_string(),
            token,
            mount: mount.trim_matches('/').to_string(),
        }
    }

    /// Check that the Vault token itself is accepted.
    pub async fn verify_token(&self) -> Result<(), LookupError> {
        let url = format!("{}{}", self.addr, constants::vault::LOOKUP_SELF_PATH);
        debug!(url = %url, "checking Vault token");

        let response = self.get(&url).await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(LookupError::Authentication(
                "Vault rejected the supplied VAULT_TOKEN".to_string(),
            )),
            status => Err(error_from_response("Vault token lookup", status, response).await),
        }
    }

    /// Read `key` from the latest version of the KV v2 secret at `path`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Authentication`] if Vault is unreachable or rejects the token (401/403)
    /// - [`LookupError::NotFound`] if the path, its latest version, or the key is missing
    pub async fn read_secret(&self, path: &str, key: &str) -> Result<String, LookupError> {
        let path = path.trim_matches('/');
        let url = format!("{}/v1/{}/data/{}", self.addr, self.mount, path);
        let what = format!("Vault secret '{}/{}'", self.mount, path);
        debug!(url = %url, "reading secret from Vault");

        let response = self.get(&url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(&what, status, response).await);
        }

        let body: KvReadResponse = response.json().await?;
        let data = body
            .data
            .data
            .ok_or_else(|| LookupError::NotFound(format!("{what} (latest version deleted)")))?;

        data.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| LookupError::NotFound(format!("key '{key}' in {what}")))
    }

    async fn get(&self, url: &str) -> Result<Response, LookupError> {
        self.http
            .get(url)
            .header(constants::vault::TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| {
                LookupError::Authentication(format!("Unable to reach Vault at {}: {e}", self.addr))
            })
    }
}

async fn error_from_response(what: &str, status: StatusCode, response: Response) -> LookupError {
    let body: VaultErrorBody = response.json().await.unwrap_or_default();
    let message = if body.errors.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body.errors.join("; ")
    };
    LookupError::from_status(status.as_u16(), what, message)
}

//! Discovery of `.env` files holding Vault connection settings.
//!
//! Files are searched in the current directory first, then the XDG config
//! directory. Variables already present in the environment are never overridden.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::constants::APP_DIR_NAME;

/// Candidate `.env` locations in priority order.
/// 1. Current directory/.env
/// 2. XDG_CONFIG_HOME/github-languages/.env (if XDG_CONFIG_HOME is set)
/// 3. ~/.config/github-languages/.env
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(current_dir) = env::current_dir() {
        candidates.push(current_dir.join(".env"));
    }

    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.trim().is_empty()
    {
        candidates.push(PathBuf::from(xdg_config_home).join(APP_DIR_NAME).join(".env"));
    }

    if let Some(home) = dirs::home_dir() {
        let default_xdg_env = home.join(".config").join(APP_DIR_NAME).join(".env");
        if !candidates.contains(&default_xdg_env) {
            candidates.push(default_xdg_env);
        }
    }

    candidates
}

/// Find the first existing `.env` file.
pub fn find_env_file() -> Option<PathBuf> {
    env_file_candidates().into_iter().find(|path| path.is_file())
}

/// Load the first `.env` file found, if any. Returns the path that was loaded.
pub fn load_env_file() -> Option<PathBuf> {
    let path = find_env_file()?;
    match dotenv::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "failed to load environment file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_candidates_start_with_current_dir() {
        let candidates = env_file_candidates();
        let current = env::current_dir().unwrap().join(".env");
        assert_eq!(candidates.first(), Some(&current));
    }

    #[test]
    fn test_candidates_use_app_dir_name() {
        assert!(
            env_file_candidates()
                .iter()
                .skip(1)
                .all(|p| p.parent().and_then(|d| d.file_name()) == Some(OsStr::new(APP_DIR_NAME)))
        );
    }
}

use thiserror::Error;

/// Errors that can occur while looking up a user's profile and languages.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(String),
    /// `status_code` is 0 when no HTTP status was available.
    #[error("API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },
}

impl LookupError {
    /// Classify an HTTP status returned by GitHub or Vault.
    ///
    /// `what` names the resource that was requested and ends up in the message.
    pub fn from_status(status_code: u16, what: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            401 | 403 => LookupError::Authentication(format!("{what}: {message}")),
            404 => LookupError::NotFound(what.to_string()),
            _ => LookupError::Api {
                status_code,
                message: format!("{what}: {message}"),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, LookupError::Authentication(_))
    }
}

impl From<octocrab::Error> for LookupError {
    /// `Display` on several octocrab variants appends a backtrace, so only the
    /// inner `source` message is kept.
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => LookupError::from_status(
                source.status_code.as_u16(),
                "GitHub",
                source.message,
            ),
            octocrab::Error::Http { source, .. } => LookupError::Network(source.to_string()),
            octocrab::Error::Hyper { source, .. } => LookupError::Network(source.to_string()),
            octocrab::Error::Service { source, .. } => LookupError::Network(source.to_string()),
            octocrab::Error::Uri { source, .. } => LookupError::Configuration(source.to_string()),
            octocrab::Error::Serde { source, .. } => LookupError::Api {
                status_code: 0,
                message: format!("unexpected response body: {source}"),
            },
            octocrab::Error::Json { source, .. } => LookupError::Api {
                status_code: 0,
                message: format!("unexpected response body: {source}"),
            },
            other => LookupError::Network(first_line(&other.to_string())),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LookupError::from_status(status.as_u16(), "Vault", err.to_string()),
            None if err.is_decode() => LookupError::Api {
                status_code: 200,
                message: format!("unexpected response body: {err}"),
            },
            None => LookupError::Network(err.to_string()),
        }
    }
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(LookupError::from_status(401, "GitHub", "Bad credentials").is_authentication());
        assert!(LookupError::from_status(403, "Vault", "permission denied").is_authentication());
        assert!(LookupError::from_status(404, "user 'ghost'", "Not Found").is_not_found());

        match LookupError::from_status(502, "GitHub", "Bad Gateway") {
            LookupError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 502);
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_first_line_drops_trailing_detail() {
        assert_eq!(first_line("Other Error: boom\nFound at 0: backtrace"), "Other Error: boom");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_not_found_message_names_resource() {
        let err = LookupError::from_status(404, "user 'ghost'", "Not Found");
        assert_eq!(err.to_string(), "Not found: user 'ghost'");
    }
}

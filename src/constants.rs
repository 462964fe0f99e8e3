//! Application constants for API endpoints, environment variables, and validation rules.
//!
//! This module contains all constant values used throughout the application,
//! including GitHub and Vault endpoints, configuration keys, and username limits.

/// GitHub API endpoint constants.
pub mod api {
    /// Default base URL of the GitHub REST API.
    pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

    /// Path template for a user's public profile.
    pub const USER_PATH_TEMPLATE: &str = "/users/{username}";

    /// Path template for a user's public repositories.
    pub const USER_REPOS_PATH_TEMPLATE: &str = "/users/{username}/repos";

    /// Repositories requested in the single listing call (GitHub maximum).
    pub const REPOS_PER_PAGE: u8 = 100;
}

/// Vault endpoint constants.
pub mod vault {
    /// Token introspection endpoint used to check the caller's own credential.
    pub const LOOKUP_SELF_PATH: &str = "/v1/auth/token/lookup-self";

    /// Header carrying the Vault token.
    pub const TOKEN_HEADER: &str = "X-Vault-Token";

    /// Default KV v2 mount point.
    pub const DEFAULT_KV_MOUNT: &str = "secret";

    /// Default path of the secret holding the GitHub token.
    pub const DEFAULT_SECRET_PATH: &str = "github";

    /// Default field inside the secret holding the GitHub token.
    pub const DEFAULT_SECRET_KEY: &str = "token";
}

/// Environment variable names.
pub mod env {
    pub const VAULT_ADDR: &str = "VAULT_ADDR";
    pub const VAULT_TOKEN: &str = "VAULT_TOKEN";
    pub const VAULT_KV_MOUNT: &str = "VAULT_KV_MOUNT";
    pub const VAULT_SECRET_PATH: &str = "VAULT_SECRET_PATH";
    pub const VAULT_SECRET_KEY: &str = "VAULT_SECRET_KEY";
    pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
}

/// Username and token validation constants.
pub mod validation {
    /// Maximum length for a GitHub username.
    pub const MAX_USERNAME_LENGTH: usize = 39;

    /// Letters, digits and hyphens, not starting with a hyphen. Older accounts
    /// may contain consecutive or trailing hyphens.
    pub const VALID_USERNAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9-]*$";

    pub const MIN_TOKEN_LENGTH: usize = 20;
    pub const MAX_TOKEN_LENGTH: usize = 255;
}

/// Name of the directory used under the XDG config home.
pub const APP_DIR_NAME: &str = "github-languages";

/// User agent sent with every outgoing request.
pub const USER_AGENT: &str = concat!("github-languages/", env!("CARGO_PKG_VERSION"));

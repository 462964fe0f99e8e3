use async_trait::async_trait;

use crate::errors::LookupError;
use crate::{github, secrets};

/// Source of the GitHub token.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn verify(&self) -> Result<(), LookupError>;
    async fn github_token(&self) -> Result<String, LookupError>;
}

#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn get_profile(&self, username: &str) -> Result<github::Profile, LookupError>;
    async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<github::Repository>, LookupError>;
}

/// Builds a GitHub client once the token is known.
pub trait GitHubApiFactory: Send + Sync {
    fn create(&self, token: String) -> Result<Box<dyn GitHubApi>, LookupError>;
}

pub struct VaultSecretProvider {
    inner: secrets::VaultClient,
    secret_path: String,
    secret_key: String,
}

impl VaultSecretProvider {
    pub fn new(inner: secrets::VaultClient, secret_path: String, secret_key: String) -> Self {
        Self {
            inner,
            secret_path,
            secret_key,
        }
    }
}

#[async_trait]
impl SecretProvider for VaultSecretProvider {
    async fn verify(&self) -> Result<(), LookupError> {
        self.inner.verify_token().await
    }

    async fn github_token(&self) -> Result<String, LookupError> {
        self.inner
            .read_secret(&self.secret_path, &self.secret_key)
            .await
    }
}

pub struct RealGitHubApi {
    inner: github::GitHubClient,
}

#[async_trait]
impl GitHubApi for RealGitHubApi {
    async fn get_profile(&self, username: &str) -> Result<github::Profile, LookupError> {
        self.inner.get_profile(username).await
    }

    async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<github::Repository>, LookupError> {
        self.inner.list_repositories(username).await
    }
}

pub struct RealGitHubApiFactory {
    base_url: String,
}

impl RealGitHubApiFactory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl GitHubApiFactory for RealGitHubApiFactory {
    fn create(&self, token: String) -> Result<Box<dyn GitHubApi>, LookupError> {
        let client = github::GitHubClient::with_base_url(token, &self.base_url)?;
        Ok(Box::new(RealGitHubApi { inner: client }))
    }
}

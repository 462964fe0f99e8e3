//! Orchestration of a single lookup: Vault → GitHub → aggregation → report.

use anyhow::{Context, Result};
use colored::*;
use tracing::info;

use crate::app_deps::{GitHubApiFactory, RealGitHubApiFactory, SecretProvider, VaultSecretProvider};
use crate::config::Settings;
use crate::github::Profile;
use crate::languages::{LanguageSet, aggregate_languages};
use crate::{report, secrets, validation};

/// Everything gathered for one user during a run.
#[derive(Debug)]
pub struct Summary {
    pub profile: Profile,
    pub repository_count: usize,
    pub languages: LanguageSet,
}

pub struct App;

impl App {
    /// Look up `username` and print the report to stdout.
    pub async fn run(username: &str) -> Result<()> {
        let summary = Self::lookup(username).await?;
        report::print_report(
            &summary.profile,
            summary.repository_count,
            &summary.languages,
        );
        Ok(())
    }

    /// Resolve configuration from the environment and perform the lookup.
    ///
    /// Input and configuration are validated before any request is made.
    pub async fn lookup(username: &str) -> Result<Summary> {
        validation::validate_username(username)?;
        let settings = Settings::from_env().context("Failed to load configuration")?;

        let provider = Self::vault_provider(&settings)?;
        let factory = RealGitHubApiFactory::new(settings.github_api_url.clone());

        Self::run_with_deps(&provider, &factory, username).await
    }

    /// Run the pipeline against injected dependencies.
    ///
    /// Steps run strictly in order and the first failure aborts the run.
    pub async fn run_with_deps(
        secret_provider: &dyn SecretProvider,
        factory: &dyn GitHubApiFactory,
        username: &str,
    ) -> Result<Summary> {
        let username = username.trim();
        validation::validate_username(username)?;

        secret_provider
            .verify()
            .await
            .context("Unable to authenticate to Vault")?;
        let token = secret_provider
            .github_token()
            .await
            .context("Failed to read GitHub token from Vault")?;
        validation::validate_token(&token).context("GitHub token stored in Vault is unusable")?;

        let github = factory.create(token)?;

        info!(username, "fetching profile");
        let profile = github
            .get_profile(username)
            .await
            .context("Failed to fetch user profile")?;

        info!(username, "fetching repositories");
        let repositories = github
            .list_repositories(username)
            .await
            .context("Failed to fetch repositories")?;

        let languages = aggregate_languages(&repositories);
        info!(
            repositories = repositories.len(),
            languages = languages.len(),
            "aggregated languages"
        );

        Ok(Summary {
            profile,
            repository_count: repositories.len(),
            languages,
        })
    }

    /// Check that Vault is reachable and accepts `VAULT_TOKEN`.
    pub async fn check_vault() -> Result<()> {
        let settings = Settings::from_env().context("Failed to load configuration")?;
        let provider = Self::vault_provider(&settings)?;

        provider
            .verify()
            .await
            .context("Unable to authenticate to Vault")?;

        println!(
            "{} Successfully authenticated to Vault at {}",
            "✓".green(),
            settings.vault_addr
        );
        Ok(())
    }

    fn vault_provider(settings: &Settings) -> Result<VaultSecretProvider> {
        let client = secrets::VaultClient::new(
            settings.vault_addr.clone(),
            settings.vault_token.clone(),
            settings.kv_mount.clone(),
        )?;
        Ok(VaultSecretProvider::new(
            client,
            settings.secret_path.clone(),
            settings.secret_key.clone(),
        ))
    }
}

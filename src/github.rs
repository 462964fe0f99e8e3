use octocrab::Octocrab;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::constants;
use crate::errors::LookupError;

/// Public profile of a GitHub user, as returned by `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A repository entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Repository {
    pub name: String,
    /// Primary language; `None` when GitHub could not classify the repository.
    #[serde(default)]
    pub language: Option<String>,
}

/// Error body returned by GitHub on failed requests.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    pub fn with_base_url(token: String, base_url: &str) -> Result<Self, LookupError> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .base_uri(base_url)
            .map_err(|e| {
                LookupError::Configuration(format!("Invalid GitHub API URL '{base_url}': {e}"))
            })?
            .build()
            .map_err(|e| {
                LookupError::Configuration(format!("Failed to create Octocrab client: {e}"))
            })?;

        Ok(Self::with_octocrab(octocrab))
    }

    pub fn with_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Fetch the public profile for `username`.
    pub async fn get_profile(&self, username: &str) -> Result<Profile, LookupError> {
        let path = constants::api::USER_PATH_TEMPLATE.replace("{username}", username);
        debug!(path = %path, "fetching profile");

        self.get_json(&path, &format!("GitHub user '{username}'"))
            .await
    }

    /// Fetch the first page of public repositories owned by `username`.
    ///
    /// Only a single request is issued. Users owning more repositories than
    /// one page holds are undercounted.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, LookupError> {
        let path = format!(
            "{}?per_page={}&page=1",
            constants::api::USER_REPOS_PATH_TEMPLATE.replace("{username}", username),
            constants::api::REPOS_PER_PAGE
        );
        debug!(path = %path, "listing repositories");

        let repositories: Vec<Repository> = self
            .get_json(&path, &format!("repositories of GitHub user '{username}'"))
            .await?;

        if repositories.len() >= usize::from(constants::api::REPOS_PER_PAGE) {
            warn!(
                username,
                count = repositories.len(),
                "repository listing filled a whole page; later pages are not fetched"
            );
        }

        Ok(repositories)
    }

    /// GET `path` and decode the body, classifying failures by HTTP status.
    ///
    /// The raw response is read first so the status survives error bodies
    /// that are empty or not JSON.
    async fn get_json<R: DeserializeOwned>(&self, path: &str, what: &str) -> Result<R, LookupError> {
        let response = self.octocrab._get(path).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiMessage>(&body)
                .map(|m| m.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(LookupError::from_status(status.as_u16(), what, message));
        }

        serde_json::from_str(&body).map_err(|e| LookupError::Api {
            status_code: status.as_u16(),
            message: format!("{what}: unexpected response body: {e}"),
        })
    }
}

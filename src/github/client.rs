use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::source::ProfileSource;
use crate::models::{Repository, UserProfile};

/// Repositories requested per analysis; a single page, never paginated.
pub const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        let base_url = Url::parse(&config.api_base)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "API base must be a hierarchical URL: {}",
                config.api_base
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Appends path segments to the API base; each segment is percent-encoded,
    /// so a handle can never add query, fragment or extra path components.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API base cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let url = self.endpoint(&["users", username])?;
        tracing::info!("Fetching user: {}", username);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch user {}: {} - {}",
                username, status, body
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string())
            .append_pair("sort", "pushed");
        tracing::info!("Fetching repositories for: {}", username);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::RepositoriesUnavailable(format!(
                "{} returned {}",
                username, status
            )));
        }

        let repos: Vec<Repository> = response.json().await?;
        tracing::debug!("Received {} repositories for {}", repos.len(), username);
        Ok(repos)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_user(&self, handle: &str) -> Result<UserProfile> {
        self.get_user(handle).await
    }

    async fn fetch_repositories(&self, handle: &str) -> Result<Vec<Repository>> {
        self.get_user_repos(handle).await
    }

    fn name(&self) -> &str {
        "github"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: &str) -> GitHubClient {
        GitHubClient::new(&Config {
            api_base: api_base.to_string(),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_handle_is_a_single_path_segment() {
        let github = client("https://api.github.com");
        let url = github.endpoint(&["users", "octocat?x=1"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat%3Fx=1");

        let url = github.endpoint(&["users", "octocat#frag"]).unwrap();
        assert_eq!(url.path(), "/users/octocat%23frag");
        assert_eq!(url.fragment(), None);

        let url = github.endpoint(&["users", "octocat/repos"]).unwrap();
        assert_eq!(url.path(), "/users/octocat%2Frepos");
    }

    #[test]
    fn test_base_path_is_kept() {
        let github = client("https://ghe.example.com/api/v3/");
        let url = github.endpoint(&["users", "octocat", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/octocat/repos");
    }

    #[test]
    fn test_rejects_invalid_base() {
        let err = GitHubClient::new(&Config {
            api_base: "not a url".to_string(),
            ..Config::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = GitHubClient::new(&Config {
            api_base: "mailto:api@example.com".to_string(),
            ..Config::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, Error::Config(_)));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of `GET /users/{handle}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default, deserialize_with = "null_as_false")]
    pub hireable: bool,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// One entry of `GET /users/{handle}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    /// Size in kilobytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub fork: bool,
    /// Null for repositories that never received a push.
    pub pushed_at: Option<DateTime<Utc>>,
    pub html_url: String,
}

impl Repository {
    pub fn pushed_after(&self, cutoff: DateTime<Utc>) -> bool {
        self.pushed_at.map(|p| p > cutoff).unwrap_or(false)
    }
}

// GitHub reports `hireable` as `true` or `null`.
fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

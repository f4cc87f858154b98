use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserProfile;

pub const NO_BIO: &str = "No bio available";
pub const NO_DESCRIPTION: &str = "No description";

/// Everything a presentation layer needs to draw one dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardViewModel {
    pub profile: ProfileSummary,
    pub stats: StatsBlock,
    pub languages: Vec<LanguageShare>,
    pub top_repositories: Vec<TopRepository>,
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSummary {
    pub login: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
    pub hireable: bool,
}

impl From<&UserProfile> for ProfileSummary {
    fn from(user: &UserProfile) -> Self {
        Self {
            login: user.login.clone(),
            display_name: user.display_name().to_string(),
            bio: user
                .bio
                .clone()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| NO_BIO.to_string()),
            avatar_url: user.avatar_url.clone(),
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            hireable: user.hireable,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatsBlock {
    pub total_stars: u64,
    pub total_forks: u64,
    pub avg_repo_size_bytes: u64,
    /// Repositories pushed within the last year. An activity heuristic,
    /// not a commit count.
    pub active_repo_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub count: usize,
    /// Share of all classified repositories, 0..=100.
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopRepository {
    pub name: String,
    pub description: String,
    pub url: String,
    pub stars: u32,
    pub forks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightKind {
    Popular { stars: u64 },
    Rising { stars: u64 },
    Polyglot { languages: usize },
    PopularRepo { name: String },
    VeryActive { repos: usize },
    Active { repos: usize },
    Influential { followers: u32 },
    Hireable,
    Growing,
}

impl InsightKind {
    pub fn icon(&self) -> &'static str {
        match self {
            InsightKind::Popular { .. } => "🌟",
            InsightKind::Rising { .. } => "⭐",
            InsightKind::Polyglot { .. } => "🔧",
            InsightKind::PopularRepo { .. } => "🚀",
            InsightKind::VeryActive { .. } => "🔥",
            InsightKind::Active { .. } => "💪",
            InsightKind::Influential { .. } => "👥",
            InsightKind::Hireable => "💼",
            InsightKind::Growing => "🌱",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightKind::Popular { stars } => {
                write!(f, "Popular developer with {} total stars!", stars)
            }
            InsightKind::Rising { stars } => write!(f, "Rising developer with {} stars earned", stars),
            InsightKind::Polyglot { languages } => {
                write!(f, "Polyglot developer using {} different languages", languages)
            }
            InsightKind::PopularRepo { name } => write!(f, "Has a popular repo: {}", name),
            InsightKind::VeryActive { repos } => {
                write!(f, "Very active! {} repos updated this month", repos)
            }
            InsightKind::Active { repos } => {
                write!(f, "Active developer with {} recent updates", repos)
            }
            InsightKind::Influential { followers } => {
                write!(f, "Influential with {} followers", followers)
            }
            InsightKind::Hireable => write!(f, "Open to job opportunities!"),
            InsightKind::Growing => write!(f, "Growing developer - keep building!"),
        }
    }
}

/// An (icon, text) observation plus the rule that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub icon: String,
    pub text: String,
    pub kind: InsightKind,
}

impl From<InsightKind> for Insight {
    fn from(kind: InsightKind) -> Self {
        Self {
            icon: kind.icon().to_string(),
            text: kind.to_string(),
            kind,
        }
    }
}

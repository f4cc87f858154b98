use std::sync::Arc;
use chrono::{DateTime, Utc};
use futures::future::try_join;

use crate::analysis::insights::generate_insights;
use crate::analysis::language_breakdown::language_breakdown;
use crate::analysis::metrics::compute_stats;
use crate::analysis::top_repos::top_repositories;
use crate::error::Result;
use crate::github::ProfileSource;
use crate::models::{DashboardViewModel, ProfileSummary, Repository, UserProfile};

/// Fetches one profile and turns it into a dashboard. Holds nothing but the
/// data source, so concurrent analyses never observe each other.
pub struct ProfileAnalyzer {
    source: Arc<dyn ProfileSource>,
}

impl ProfileAnalyzer {
    pub fn new(source: impl ProfileSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub async fn analyze(&self, handle: &str) -> Result<DashboardViewModel> {
        self.analyze_at(handle, Utc::now()).await
    }

    /// Both endpoints are requested together; the first failure wins and the
    /// other request is dropped.
    pub async fn analyze_at(&self, handle: &str, now: DateTime<Utc>) -> Result<DashboardViewModel> {
        tracing::info!("Analyzing {} via {}", handle, self.source.name());

        let (user, repos) = try_join(
            self.source.fetch_user(handle),
            self.source.fetch_repositories(handle),
        )
        .await
        .map_err(|e| {
            tracing::warn!("Analysis of {} failed: {}", handle, e);
            e
        })?;

        tracing::info!("Fetched {} repositories for {}", repos.len(), user.login);
        Ok(build_dashboard(&user, &repos, now))
    }
}

pub fn build_dashboard(
    user: &UserProfile,
    repos: &[Repository],
    now: DateTime<Utc>,
) -> DashboardViewModel {
    DashboardViewModel {
        profile: ProfileSummary::from(user),
        stats: compute_stats(repos, now),
        languages: language_breakdown(repos),
        top_repositories: top_repositories(repos),
        insights: generate_insights(user, repos, now),
        generated_at: now,
    }
}

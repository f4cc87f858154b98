pub mod analyzer;
pub mod insights;
pub mod language_breakdown;
pub mod metrics;
pub mod session;
pub mod top_repos;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analyzer::{build_dashboard, ProfileAnalyzer};
pub use insights::generate_insights;
pub use language_breakdown::language_breakdown;
pub use metrics::compute_stats;
pub use session::{AnalysisState, DashboardSession};
pub use top_repos::top_repositories;

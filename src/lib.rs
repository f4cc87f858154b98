pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use github::{GitHubClient, ProfileSource};
pub use analysis::{AnalysisState, DashboardSession, ProfileAnalyzer};
pub use render::OutputFormat;

use async_trait::async_trait;
use crate::error::Result;
use crate::models::{Repository, UserProfile};

/// The two read endpoints the analyzer depends on.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_user(&self, handle: &str) -> Result<UserProfile>;
    async fn fetch_repositories(&self, handle: &str) -> Result<Vec<Repository>>;
    fn name(&self) -> &str;
}

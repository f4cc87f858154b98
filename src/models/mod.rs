pub mod user;
pub mod dashboard;

pub use user::*;
pub use dashboard::*;

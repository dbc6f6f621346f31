pub mod refresh_job;

pub use refresh_job::{DashboardRefreshJob, RefreshRunStats};

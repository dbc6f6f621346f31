pub mod api;
pub mod cache;
pub mod jobs;

pub use api::rest_client::RestApiClient;
pub use cache::session_cache::{InMemoryProfileStore, SessionCache};
pub use jobs::refresh_job::DashboardRefreshJob;

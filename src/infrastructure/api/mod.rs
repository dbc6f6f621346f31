pub mod models;
pub mod rest_client;

pub use models::AuthSession;
pub use rest_client::{ApiClientError, RestApiClient};

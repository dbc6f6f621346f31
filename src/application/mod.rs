pub mod ports;
pub mod services;

pub use ports::marketplace_gateway::{AccessScope, ImageUpload, MarketplaceGateway};
pub use ports::profile_store::ProfileStore;
pub use services::enrichment_service::EnrichmentService;
pub use services::order_dashboard::{BulkOutcome, OrderDashboard};
pub use services::review_dashboard::ReviewDashboard;

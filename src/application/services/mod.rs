pub mod enrichment_service;
pub mod listing;
pub mod order_dashboard;
pub mod review_dashboard;

pub use enrichment_service::EnrichmentService;
pub use listing::{OrderFilter, OrderSortKey, Paged, ReviewFilter, ReviewSortKey};
pub use order_dashboard::{BulkOutcome, OrderDashboard};
pub use review_dashboard::ReviewDashboard;

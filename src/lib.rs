//! Client-side engine for the ODOP marketplace dashboards.
//!
//! The engine fetches order/review snapshots from the remote REST
//! backend, normalizes backend status strings, enriches records from
//! session-lifetime account caches, filters/sorts/paginates them into
//! view rows, and writes single-field mutations back. One dashboard
//! instance exists per caller scope (admin, vendor, customer).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use application::ports::marketplace_gateway::{AccessScope, MarketplaceGateway};
pub use application::services::listing::{OrderFilter, OrderSortKey, ReviewFilter, ReviewSortKey};
pub use application::services::order_dashboard::{BulkOutcome, OrderDashboard};
pub use application::services::review_dashboard::ReviewDashboard;
pub use domain::entities::{
    ModerationStatus, Order, OrderStats, OrderStatus, PaymentStatus, Review, ReviewStats,
    Sentiment,
};
pub use shared::{AppConfig, AppError, Result};
pub use state::AppState;

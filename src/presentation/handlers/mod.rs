pub mod order_handler;
pub mod review_handler;

pub use order_handler::OrderHandler;
pub use review_handler::ReviewHandler;

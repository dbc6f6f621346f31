pub mod entities;

pub use entities::{
    CustomerProfile, ModerationStatus, NewProduct, Order, OrderItem, OrderStats, OrderStatus,
    PaymentStatus, Product, Review, ReviewStats, Sentiment, VendorProfile,
};

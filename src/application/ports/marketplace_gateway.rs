use crate::domain::entities::{
    CustomerProfile, ModerationStatus, NewProduct, Order, OrderStatus, Product, Review,
    VendorProfile,
};
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::fmt;

/// Visibility scope of the caller. Admin sees everything; vendors and
/// customers see their own records. This is the only gating in the
/// system; status transitions themselves are never validated client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessScope {
    Admin,
    Vendor { vendor_id: String },
    Customer { customer_id: String },
}

impl AccessScope {
    pub fn is_admin(&self) -> bool {
        matches!(self, AccessScope::Admin)
    }

    pub fn vendor_id(&self) -> Option<&str> {
        match self {
            AccessScope::Vendor { vendor_id } => Some(vendor_id),
            _ => None,
        }
    }

    pub fn customer_id(&self) -> Option<&str> {
        match self {
            AccessScope::Customer { customer_id } => Some(customer_id),
            _ => None,
        }
    }
}

impl fmt::Display for AccessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessScope::Admin => f.write_str("admin"),
            AccessScope::Vendor { vendor_id } => write!(f, "vendor:{}", vendor_id),
            AccessScope::Customer { customer_id } => write!(f, "customer:{}", customer_id),
        }
    }
}

/// Image part attached to a product create call (multipart upload).
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait MarketplaceGateway: Send + Sync {
    async fn list_orders(&self, scope: &AccessScope) -> Result<Vec<Order>, AppError>;
    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), AppError>;
    async fn cancel_order(&self, order_id: &str) -> Result<(), AppError>;

    async fn get_customer(&self, id: &str) -> Result<Option<CustomerProfile>, AppError>;
    async fn get_vendor(&self, id: &str) -> Result<Option<VendorProfile>, AppError>;

    async fn list_reviews(&self, scope: &AccessScope) -> Result<Vec<Review>, AppError>;
    async fn set_review_moderation(
        &self,
        review_id: &str,
        status: ModerationStatus,
    ) -> Result<(), AppError>;
    async fn reply_to_review(&self, review_id: &str, reply: &str) -> Result<(), AppError>;
    async fn delete_review(&self, review_id: &str) -> Result<(), AppError>;

    async fn list_products(&self, vendor_id: Option<String>) -> Result<Vec<Product>, AppError>;
    async fn create_product(
        &self,
        product: &NewProduct,
        image: Option<ImageUpload>,
    ) -> Result<Product, AppError>;
}

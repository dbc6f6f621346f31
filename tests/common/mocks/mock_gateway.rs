use async_trait::async_trait;
use odop_client::application::ports::marketplace_gateway::{
    AccessScope, ImageUpload, MarketplaceGateway,
};
use odop_client::domain::entities::{
    CustomerProfile, ModerationStatus, NewProduct, Order, OrderStatus, Product, Review,
    VendorProfile,
};
use odop_client::shared::error::AppError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// In-memory gateway for integration flows: scope-aware listings,
/// per-call lookup counters and per-id failure injection.
pub struct MockMarketplaceGateway {
    orders: RwLock<Vec<Order>>,
    reviews: RwLock<Vec<Review>>,
    customers: RwLock<HashMap<String, CustomerProfile>>,
    vendors: RwLock<HashMap<String, VendorProfile>>,
    failing_order_ids: RwLock<HashSet<String>>,
    failing_review_ids: RwLock<HashSet<String>>,
    pub customer_lookups: AtomicUsize,
    pub vendor_lookups: AtomicUsize,
    pub status_writes: AtomicUsize,
}

impl MockMarketplaceGateway {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
            reviews: RwLock::new(Vec::new()),
            customers: RwLock::new(HashMap::new()),
            vendors: RwLock::new(HashMap::new()),
            failing_order_ids: RwLock::new(HashSet::new()),
            failing_review_ids: RwLock::new(HashSet::new()),
            customer_lookups: AtomicUsize::new(0),
            vendor_lookups: AtomicUsize::new(0),
            status_writes: AtomicUsize::new(0),
        }
    }

    pub fn with_orders(self, orders: Vec<Order>) -> Self {
        *self.orders.write().unwrap() = orders;
        self
    }

    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        *self.reviews.write().unwrap() = reviews;
        self
    }

    pub fn with_customer(self, profile: CustomerProfile) -> Self {
        self.customers
            .write()
            .unwrap()
            .insert(profile.id.clone(), profile);
        self
    }

    pub fn with_vendor(self, profile: VendorProfile) -> Self {
        self.vendors
            .write()
            .unwrap()
            .insert(profile.id.clone(), profile);
        self
    }

    /// Any status write or cancel for this order will fail.
    pub fn failing_order(self, order_id: &str) -> Self {
        self.failing_order_ids
            .write()
            .unwrap()
            .insert(order_id.to_string());
        self
    }

    pub fn failing_review(self, review_id: &str) -> Self {
        self.failing_review_ids
            .write()
            .unwrap()
            .insert(review_id.to_string());
        self
    }

    pub fn stored_order_status(&self, order_id: &str) -> Option<OrderStatus> {
        self.orders
            .read()
            .unwrap()
            .iter()
            .find(|o| o.id == order_id)
            .map(|o| o.status)
    }

    fn order_write_allowed(&self, order_id: &str) -> Result<(), AppError> {
        if self.failing_order_ids.read().unwrap().contains(order_id) {
            return Err(AppError::Network("injected failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockMarketplaceGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketplaceGateway for MockMarketplaceGateway {
    async fn list_orders(&self, scope: &AccessScope) -> Result<Vec<Order>, AppError> {
        let orders = self.orders.read().unwrap();
        let visible = orders
            .iter()
            .filter(|order| match scope {
                AccessScope::Admin => true,
                AccessScope::Vendor { vendor_id } => &order.vendor_id == vendor_id,
                AccessScope::Customer { customer_id } => &order.customer_id == customer_id,
            })
            .cloned()
            .collect();
        Ok(visible)
    }

    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        self.status_writes.fetch_add(1, Ordering::SeqCst);
        self.order_write_allowed(order_id)?;
        let mut orders = self.orders.write().unwrap();
        match orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("order {order_id}"))),
        }
    }

    async fn cancel_order(&self, order_id: &str) -> Result<(), AppError> {
        self.order_write_allowed(order_id)?;
        let mut orders = self.orders.write().unwrap();
        match orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.status = OrderStatus::Cancelled;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("order {order_id}"))),
        }
    }

    async fn get_customer(&self, id: &str) -> Result<Option<CustomerProfile>, AppError> {
        self.customer_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.customers.read().unwrap().get(id).cloned())
    }

    async fn get_vendor(&self, id: &str) -> Result<Option<VendorProfile>, AppError> {
        self.vendor_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.vendors.read().unwrap().get(id).cloned())
    }

    async fn list_reviews(&self, scope: &AccessScope) -> Result<Vec<Review>, AppError> {
        let reviews = self.reviews.read().unwrap();
        let visible = reviews
            .iter()
            .filter(|review| match scope {
                AccessScope::Admin => true,
                AccessScope::Vendor { vendor_id } => &review.vendor_id == vendor_id,
                AccessScope::Customer { customer_id } => &review.customer_id == customer_id,
            })
            .cloned()
            .collect();
        Ok(visible)
    }

    async fn set_review_moderation(
        &self,
        review_id: &str,
        status: ModerationStatus,
    ) -> Result<(), AppError> {
        if self.failing_review_ids.read().unwrap().contains(review_id) {
            return Err(AppError::Network("injected failure".to_string()));
        }
        let mut reviews = self.reviews.write().unwrap();
        match reviews.iter_mut().find(|r| r.id == review_id) {
            Some(review) => {
                review.moderation = status;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("review {review_id}"))),
        }
    }

    async fn reply_to_review(&self, review_id: &str, reply: &str) -> Result<(), AppError> {
        let mut reviews = self.reviews.write().unwrap();
        match reviews.iter_mut().find(|r| r.id == review_id) {
            Some(review) => {
                review.reply = Some(reply.to_string());
                Ok(())
            }
            None => Err(AppError::NotFound(format!("review {review_id}"))),
        }
    }

    async fn delete_review(&self, review_id: &str) -> Result<(), AppError> {
        let mut reviews = self.reviews.write().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id != review_id);
        if reviews.len() == before {
            return Err(AppError::NotFound(format!("review {review_id}")));
        }
        Ok(())
    }

    async fn list_products(&self, _vendor_id: Option<String>) -> Result<Vec<Product>, AppError> {
        Ok(Vec::new())
    }

    async fn create_product(
        &self,
        _product: &NewProduct,
        _image: Option<ImageUpload>,
    ) -> Result<Product, AppError> {
        Err(AppError::Internal("not supported by the mock".to_string()))
    }
}

use crate::application::ports::marketplace_gateway::MarketplaceGateway;
use crate::application::ports::profile_store::ProfileStore;
use crate::domain::entities::{CustomerProfile, Order, Review, VendorProfile};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

/// Lazy lookup-and-cache of referenced account display fields.
///
/// IDs are collected and de-duplicated before any request goes out, so a
/// batch of records referencing the same customer costs one lookup. A
/// failed lookup stores a blank projection: the fields stay blank for the
/// rest of the session and the lookup is not retried. Enrichment never
/// fails the parent view.
pub struct EnrichmentService {
    gateway: Arc<dyn MarketplaceGateway>,
    profiles: Arc<dyn ProfileStore>,
}

impl EnrichmentService {
    pub fn new(gateway: Arc<dyn MarketplaceGateway>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { gateway, profiles }
    }

    pub async fn enrich_orders(&self, orders: &mut [Order]) {
        let customer_ids = distinct(orders.iter().map(|o| o.customer_id.clone()));
        let vendor_ids = distinct(orders.iter().map(|o| o.vendor_id.clone()));

        let customers = self.resolve_customers(&customer_ids).await;
        let vendors = self.resolve_vendors(&vendor_ids).await;

        for order in orders.iter_mut() {
            order.customer = customers.get(&order.customer_id).cloned();
            order.vendor = vendors.get(&order.vendor_id).cloned();
        }
    }

    pub async fn enrich_reviews(&self, reviews: &mut [Review]) {
        let customer_ids = distinct(reviews.iter().map(|r| r.customer_id.clone()));
        let customers = self.resolve_customers(&customer_ids).await;

        for review in reviews.iter_mut() {
            review.customer = customers.get(&review.customer_id).cloned();
        }
    }

    async fn resolve_customers(&self, ids: &[String]) -> HashMap<String, CustomerProfile> {
        let mut resolved = self.profiles.get_customers(ids).await;
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !resolved.contains_key(*id))
            .cloned()
            .collect();

        let lookups = missing.iter().map(|id| {
            let gateway = Arc::clone(&self.gateway);
            async move { (id.clone(), gateway.get_customer(id).await) }
        });
        for (id, outcome) in join_all(lookups).await {
            let profile = match outcome {
                Ok(Some(profile)) => profile,
                Ok(None) => CustomerProfile::blank(&id),
                Err(err) => {
                    tracing::warn!(customer_id = %id, error = %err, "customer lookup failed");
                    CustomerProfile::blank(&id)
                }
            };
            self.profiles.put_customer(profile.clone()).await;
            resolved.insert(id, profile);
        }
        resolved
    }

    async fn resolve_vendors(&self, ids: &[String]) -> HashMap<String, VendorProfile> {
        let mut resolved = self.profiles.get_vendors(ids).await;
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !resolved.contains_key(*id))
            .cloned()
            .collect();

        let lookups = missing.iter().map(|id| {
            let gateway = Arc::clone(&self.gateway);
            async move { (id.clone(), gateway.get_vendor(id).await) }
        });
        for (id, outcome) in join_all(lookups).await {
            let profile = match outcome {
                Ok(Some(profile)) => profile,
                Ok(None) => VendorProfile::blank(&id),
                Err(err) => {
                    tracing::warn!(vendor_id = %id, error = %err, "vendor lookup failed");
                    VendorProfile::blank(&id)
                }
            };
            self.profiles.put_vendor(profile.clone()).await;
            resolved.insert(id, profile);
        }
        resolved
    }
}

fn distinct(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for id in ids {
        if seen.insert(id.clone()) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::marketplace_gateway::{AccessScope, ImageUpload};
    use crate::application::ports::profile_store::ProfileStore;
    use crate::domain::entities::{
        ModerationStatus, NewProduct, OrderItem, OrderStatus, PaymentStatus, Product,
    };
    use crate::infrastructure::cache::session_cache::InMemoryProfileStore;
    use crate::shared::AppError;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl MarketplaceGateway for Gateway {
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
    }

    fn order(id: &str, customer_id: &str, vendor_id: &str) -> Order {
        Order {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            vendor_id: vendor_id.to_string(),
            total: 100.0,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: "cod".to_string(),
            placed_at: Utc::now(),
            items: vec![OrderItem {
                product_id: "p1".to_string(),
                product_name: "Blue pottery vase".to_string(),
                image_url: None,
                quantity: 1,
                unit_price: 100.0,
            }],
            customer: None,
            vendor: None,
        }
    }

    fn customer(id: &str, name: &str) -> CustomerProfile {
        CustomerProfile {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.in"),
            phone: "9999999999".to_string(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn duplicate_references_cost_one_lookup() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_customer()
            .with(eq("c1"))
            .times(1)
            .returning(|id| Ok(Some(customer(id, "Asha"))));
        gateway
            .expect_get_vendor()
            .with(eq("v1"))
            .times(1)
            .returning(|id| {
                Ok(Some(VendorProfile {
                    id: id.to_string(),
                    name: "Jaipur Crafts".to_string(),
                    email: "crafts@example.in".to_string(),
                    phone: "8888888888".to_string(),
                    logo_url: None,
                    district: Some("Jaipur".to_string()),
                }))
            });

        let store = Arc::new(InMemoryProfileStore::new());
        let service = EnrichmentService::new(Arc::new(gateway), store);

        let mut orders = vec![order("o1", "c1", "v1"), order("o2", "c1", "v1")];
        service.enrich_orders(&mut orders).await;

        assert_eq!(orders[0].customer_display_name(), "Asha");
        assert_eq!(orders[1].customer_display_name(), "Asha");
        assert_eq!(orders[0].vendor_display_name(), "Jaipur Crafts");
    }

    #[tokio::test]
    async fn cached_profiles_issue_no_lookup() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_customer().times(0);
        gateway.expect_get_vendor().times(0);

        let store = Arc::new(InMemoryProfileStore::new());
        store.put_customer(customer("c1", "Asha")).await;
        store
            .put_vendor(VendorProfile::blank("v1"))
            .await;

        let service = EnrichmentService::new(Arc::new(gateway), store);
        let mut orders = vec![order("o1", "c1", "v1")];
        service.enrich_orders(&mut orders).await;

        assert_eq!(orders[0].customer_display_name(), "Asha");
    }

    #[tokio::test]
    async fn failed_lookup_stays_blank_and_is_not_retried() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_customer()
            .with(eq("c1"))
            .times(1)
            .returning(|_| Err(AppError::Network("connection refused".to_string())));
        gateway
            .expect_get_vendor()
            .with(eq("v1"))
            .times(1)
            .returning(|_| Ok(None));

        let store = Arc::new(InMemoryProfileStore::new());
        let service = EnrichmentService::new(Arc::new(gateway), store);

        let mut orders = vec![order("o1", "c1", "v1")];
        service.enrich_orders(&mut orders).await;
        assert_eq!(orders[0].customer_display_name(), "");
        assert_eq!(orders[0].vendor_display_name(), "");

        // Second pass hits the cached blanks; mock would panic on a retry.
        let mut again = vec![order("o2", "c1", "v1")];
        service.enrich_orders(&mut again).await;
        assert_eq!(again[0].customer_display_name(), "");
    }

    #[tokio::test]
    async fn reviews_enrich_customers_only() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_customer()
            .with(eq("c9"))
            .times(1)
            .returning(|id| Ok(Some(customer(id, "Ravi"))));

        let store = Arc::new(InMemoryProfileStore::new());
        let service = EnrichmentService::new(Arc::new(gateway), store);

        let mut reviews = vec![Review {
            id: "r1".to_string(),
            rating: 4,
            comment: "lovely weave".to_string(),
            customer_id: "c9".to_string(),
            product_id: "p1".to_string(),
            product_name: "Banarasi saree".to_string(),
            vendor_id: "v1".to_string(),
            moderation: ModerationStatus::Pending,
            reply: None,
            created_at: Utc::now(),
            customer: None,
        }];
        service.enrich_reviews(&mut reviews).await;
        assert_eq!(reviews[0].customer_display_name(), "Ravi");
    }
}

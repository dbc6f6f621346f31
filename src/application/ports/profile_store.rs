use crate::domain::entities::{CustomerProfile, VendorProfile};
use async_trait::async_trait;
use std::collections::HashMap;

/// Session-scoped cache of account projections. Entries are populated
/// lazily and never invalidated within a session; staleness is accepted.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_customer(&self, id: &str) -> Option<CustomerProfile>;
    async fn get_customers(&self, ids: &[String]) -> HashMap<String, CustomerProfile>;
    async fn put_customer(&self, profile: CustomerProfile);

    async fn get_vendor(&self, id: &str) -> Option<VendorProfile>;
    async fn get_vendors(&self, ids: &[String]) -> HashMap<String, VendorProfile>;
    async fn put_vendor(&self, profile: VendorProfile);
}

use crate::application::ports::profile_store::ProfileStore;
use crate::domain::entities::{CustomerProfile, VendorProfile};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session-lifetime cache keyed by ID. No TTL, no eviction, no
/// invalidation; entries live until the process exits and staleness is
/// accepted.
pub struct SessionCache<T: Clone> {
    entries: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> SessionCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, key: String, value: T) {
        let mut entries = self.entries.write().await;
        entries.insert(key, value);
    }

    pub async fn insert_many(&self, values: impl IntoIterator<Item = (String, T)>) {
        let mut entries = self.entries.write().await;
        for (key, value) in values {
            entries.insert(key, value);
        }
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    pub async fn get_many(&self, keys: &[String]) -> HashMap<String, T> {
        let entries = self.entries.read().await;
        let mut results = HashMap::new();
        for key in keys {
            if let Some(value) = entries.get(key) {
                results.insert(key.clone(), value.clone());
            }
        }
        results
    }

    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T> Default for SessionCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Customer and vendor projection caches behind the `ProfileStore` port.
pub struct InMemoryProfileStore {
    customers: SessionCache<CustomerProfile>,
    vendors: SessionCache<VendorProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            customers: SessionCache::new(),
            vendors: SessionCache::new(),
        }
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_customer(&self, id: &str) -> Option<CustomerProfile> {
        self.customers.get(id).await
    }

    async fn get_customers(&self, ids: &[String]) -> HashMap<String, CustomerProfile> {
        self.customers.get_many(ids).await
    }

    async fn put_customer(&self, profile: CustomerProfile) {
        self.customers.insert(profile.id.clone(), profile).await;
    }

    async fn get_vendor(&self, id: &str) -> Option<VendorProfile> {
        self.vendors.get(id).await
    }

    async fn get_vendors(&self, ids: &[String]) -> HashMap<String, VendorProfile> {
        self.vendors.get_many(ids).await
    }

    async fn put_vendor(&self, profile: VendorProfile) {
        self.vendors.insert(profile.id.clone(), profile).await;
    }
}

use super::enrichment_service::EnrichmentService;
use super::listing::{self, OrderFilter, OrderSortKey, Paged};
use crate::application::ports::marketplace_gateway::{AccessScope, MarketplaceGateway};
use crate::domain::entities::{Order, OrderStats, OrderStatus};
use crate::shared::error::AppError;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Per-item outcome of a bulk mutation. There is no atomicity and no
/// rollback: entities whose request failed keep their previous status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkOutcome {
    pub requested: usize,
    pub succeeded: usize,
    pub failed_ids: Vec<String>,
}

impl BulkOutcome {
    pub fn summary(&self) -> String {
        format!("{}/{}", self.succeeded, self.requested)
    }
}

struct DashboardState {
    orders: Vec<Order>,
    filter: OrderFilter,
    sort: OrderSortKey,
    page: usize,
    stats: OrderStats,
}

/// One dashboard instance per caller scope: admin sees all orders, a
/// vendor or customer sees their own. Holds the full in-memory snapshot;
/// the visible page is recomputed from scratch on every read.
pub struct OrderDashboard {
    scope: AccessScope,
    gateway: Arc<dyn MarketplaceGateway>,
    enrichment: Arc<EnrichmentService>,
    page_size: usize,
    state: RwLock<DashboardState>,
}

impl OrderDashboard {
    pub fn new(
        scope: AccessScope,
        gateway: Arc<dyn MarketplaceGateway>,
        enrichment: Arc<EnrichmentService>,
        page_size: usize,
    ) -> Self {
        Self {
            scope,
            gateway,
            enrichment,
            page_size: page_size.max(1),
            state: RwLock::new(DashboardState {
                orders: Vec::new(),
                filter: OrderFilter::default(),
                sort: OrderSortKey::default(),
                page: 1,
                stats: OrderStats::default(),
            }),
        }
    }

    pub fn scope(&self) -> &AccessScope {
        &self.scope
    }

    /// Fetches the full snapshot for the scope, enriches it and
    /// recomputes stats. The active filter and page carry over; the page
    /// is re-clamped on the next read.
    pub async fn refresh(&self) -> Result<(), AppError> {
        let mut orders = self.gateway.list_orders(&self.scope).await?;
        self.enrichment.enrich_orders(&mut orders).await;
        let stats = OrderStats::collect(&orders);

        let mut state = self.state.write().await;
        state.orders = orders;
        state.stats = stats;
        Ok(())
    }

    /// Current page of the filtered, sorted collection.
    pub async fn current_page(&self) -> Paged<Order> {
        let state = self.state.read().await;
        let mut filtered = listing::filter_orders(&state.orders, &state.filter);
        listing::sort_orders(&mut filtered, state.sort);
        listing::paginate(&filtered, state.page, self.page_size)
    }

    pub async fn stats(&self) -> OrderStats {
        let state = self.state.read().await;
        state.stats
    }

    /// Replacing the filter always resets to page 1.
    pub async fn set_filter(&self, filter: OrderFilter) {
        let mut state = self.state.write().await;
        state.filter = filter;
        state.page = 1;
    }

    pub async fn set_sort(&self, sort: OrderSortKey) {
        let mut state = self.state.write().await;
        state.sort = sort;
        state.page = 1;
    }

    pub async fn set_page(&self, page: usize) {
        let mut state = self.state.write().await;
        state.page = page.max(1);
    }

    /// Single status write. On success the order is patched in the local
    /// snapshot and stats recomputed; on failure local state is left
    /// untouched and the error propagates to the caller.
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<(), AppError> {
        self.gateway.update_order_status(order_id, status).await?;
        self.patch_status(order_id, status).await;
        Ok(())
    }

    pub async fn cancel(&self, order_id: &str) -> Result<(), AppError> {
        self.gateway.cancel_order(order_id).await?;
        self.patch_status(order_id, OrderStatus::Cancelled).await;
        Ok(())
    }

    /// One request per order, issued concurrently. Per-item failures are
    /// collected, successful orders are patched locally, and the outcome
    /// reports a partial-success count.
    pub async fn bulk_update_status(
        &self,
        order_ids: &[String],
        status: OrderStatus,
    ) -> BulkOutcome {
        let writes = order_ids.iter().map(|id| {
            let gateway = Arc::clone(&self.gateway);
            async move { (id.clone(), gateway.update_order_status(id, status).await) }
        });

        let mut succeeded_ids = Vec::new();
        let mut failed_ids = Vec::new();
        for (id, outcome) in join_all(writes).await {
            match outcome {
                Ok(()) => succeeded_ids.push(id),
                Err(err) => {
                    tracing::warn!(order_id = %id, error = %err, "bulk status write failed");
                    failed_ids.push(id);
                }
            }
        }

        {
            let mut state = self.state.write().await;
            for order in state.orders.iter_mut() {
                if succeeded_ids.iter().any(|id| id == &order.id) {
                    order.status = status;
                }
            }
            state.stats = OrderStats::collect(&state.orders);
        }

        BulkOutcome {
            requested: order_ids.len(),
            succeeded: succeeded_ids.len(),
            failed_ids,
        }
    }

    /// The order may appear both in the full collection and the current
    /// page; the page is derived from the collection, so one patch covers
    /// both.
    async fn patch_status(&self, order_id: &str, status: OrderStatus) {
        let mut state = self.state.write().await;
        for order in state.orders.iter_mut() {
            if order.id == order_id {
                order.status = status;
            }
        }
        state.stats = OrderStats::collect(&state.orders);
    }
}

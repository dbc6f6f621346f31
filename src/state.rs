use crate::application::ports::marketplace_gateway::{AccessScope, MarketplaceGateway};
use crate::application::ports::profile_store::ProfileStore;
use crate::application::services::enrichment_service::EnrichmentService;
use crate::application::services::order_dashboard::OrderDashboard;
use crate::application::services::review_dashboard::ReviewDashboard;
use crate::infrastructure::api::rest_client::RestApiClient;
use crate::infrastructure::cache::session_cache::InMemoryProfileStore;
use crate::infrastructure::jobs::refresh_job::DashboardRefreshJob;
use crate::presentation::handlers::{OrderHandler, ReviewHandler};
use crate::shared::config::AppConfig;
use crate::shared::error::{AppError, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Wires the client, the session caches and the services. Dashboards are
/// created per caller scope on top of the shared gateway and caches.
pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<RestApiClient>,
    gateway: Arc<dyn MarketplaceGateway>,
    enrichment: Arc<EnrichmentService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().map_err(AppError::ConfigurationError)?;

        let client = Arc::new(RestApiClient::new(&config.api)?);
        let gateway: Arc<dyn MarketplaceGateway> = client.clone();
        let profiles: Arc<dyn ProfileStore> = Arc::new(InMemoryProfileStore::new());
        let enrichment = Arc::new(EnrichmentService::new(Arc::clone(&gateway), profiles));

        Ok(Self {
            config,
            client,
            gateway,
            enrichment,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AppConfig::from_env())
    }

    pub fn order_dashboard(&self, scope: AccessScope) -> Arc<OrderDashboard> {
        Arc::new(OrderDashboard::new(
            scope,
            Arc::clone(&self.gateway),
            Arc::clone(&self.enrichment),
            self.config.listing.page_size,
        ))
    }

    pub fn review_dashboard(&self, scope: AccessScope) -> Arc<ReviewDashboard> {
        Arc::new(ReviewDashboard::new(
            scope,
            Arc::clone(&self.gateway),
            Arc::clone(&self.enrichment),
            self.config.listing.page_size,
        ))
    }

    pub fn order_handler(&self, scope: AccessScope) -> OrderHandler {
        OrderHandler::new(self.order_dashboard(scope))
    }

    pub fn review_handler(&self, scope: AccessScope) -> ReviewHandler {
        ReviewHandler::new(self.review_dashboard(scope))
    }

    /// Starts auto-refresh for the given dashboards when enabled. The
    /// returned job handle is the teardown hook: `stop()` ends the loop
    /// on the next tick.
    pub fn spawn_refresh(
        &self,
        orders: Arc<OrderDashboard>,
        reviews: Option<Arc<ReviewDashboard>>,
    ) -> Option<(Arc<DashboardRefreshJob>, JoinHandle<()>)> {
        if !self.config.refresh.auto_refresh {
            return None;
        }
        let job = Arc::new(DashboardRefreshJob::new(
            orders,
            reviews,
            self.config.refresh.interval_secs,
        ));
        let handle = Arc::clone(&job).spawn();
        Some((job, handle))
    }
}

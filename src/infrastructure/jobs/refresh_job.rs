use crate::application::services::order_dashboard::OrderDashboard;
use crate::application::services::review_dashboard::ReviewDashboard;
use crate::shared::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy)]
pub struct RefreshRunStats {
    pub orders_loaded: usize,
    pub reviews_loaded: usize,
}

/// Periodic re-run of the full fetch-normalize-enrich pipeline. Ticks
/// are sequential awaits; a tick that fails logs and leaves the previous
/// snapshot in place. The stop flag ends the loop on teardown but does
/// not abort a request already in flight.
pub struct DashboardRefreshJob {
    orders: Arc<OrderDashboard>,
    reviews: Option<Arc<ReviewDashboard>>,
    interval_secs: u64,
    stopped: Arc<AtomicBool>,
}

impl DashboardRefreshJob {
    pub fn new(
        orders: Arc<OrderDashboard>,
        reviews: Option<Arc<ReviewDashboard>>,
        interval_secs: u64,
    ) -> Self {
        Self {
            orders,
            reviews,
            interval_secs: interval_secs.max(1),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    pub async fn run_once(&self) -> Result<RefreshRunStats, AppError> {
        let started = Instant::now();
        let result = self.execute_once().await;
        let duration_ms = started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64;

        match &result {
            Ok(stats) => {
                tracing::info!(
                    target: "jobs::refresh",
                    scope = %self.orders.scope(),
                    orders_loaded = stats.orders_loaded,
                    reviews_loaded = stats.reviews_loaded,
                    duration_ms,
                    "dashboard refresh completed"
                );
            }
            Err(err) => {
                tracing::warn!(
                    target: "jobs::refresh",
                    scope = %self.orders.scope(),
                    error = %err,
                    duration_ms,
                    "dashboard refresh failed"
                );
            }
        }

        result
    }

    async fn execute_once(&self) -> Result<RefreshRunStats, AppError> {
        self.orders.refresh().await?;
        let orders_loaded = self.orders.stats().await.total_orders;

        let mut reviews_loaded = 0;
        if let Some(reviews) = &self.reviews {
            reviews.refresh().await?;
            reviews_loaded = reviews.stats().await.total_reviews;
        }

        Ok(RefreshRunStats {
            orders_loaded,
            reviews_loaded,
        })
    }

    /// Spawns the polling loop. The first refresh runs on the first tick,
    /// immediately after spawn.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                ticker.tick().await;
                if self.is_stopped() {
                    break;
                }
                let _ = self.run_once().await;
            }
        })
    }
}

use crate::application::ports::marketplace_gateway::AccessScope;
use crate::application::services::listing::OrderSortKey;
use crate::application::services::order_dashboard::OrderDashboard;
use crate::domain::entities::OrderStats;
use crate::presentation::dto::order_dto::{
    parse_status, BulkStatusRequest, BulkStatusResponse, OrderListRequest, OrderPageResponse,
    UpdateOrderStatusRequest,
};
use crate::presentation::dto::{ApiResponse, Validate};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Entry points the order dashboard UI calls. Gating here is role-based
/// visibility only; there is no status-transition table, any status may
/// be written at any time.
pub struct OrderHandler {
    dashboard: Arc<OrderDashboard>,
}

impl OrderHandler {
    pub fn new(dashboard: Arc<OrderDashboard>) -> Self {
        Self { dashboard }
    }

    pub async fn refresh(&self) -> ApiResponse<OrderStats> {
        ApiResponse::from_result(self.refresh_inner().await)
    }

    async fn refresh_inner(&self) -> Result<OrderStats, AppError> {
        self.dashboard.refresh().await?;
        Ok(self.dashboard.stats().await)
    }

    pub async fn list(&self, request: OrderListRequest) -> ApiResponse<OrderPageResponse> {
        ApiResponse::from_result(self.list_inner(request).await)
    }

    async fn list_inner(&self, request: OrderListRequest) -> Result<OrderPageResponse, AppError> {
        request.validate().map_err(AppError::ValidationError)?;
        let sort = OrderSortKey::try_from_str(request.sort.as_deref())?;

        self.dashboard.set_filter(request.to_filter()).await;
        self.dashboard.set_sort(sort).await;
        if let Some(page) = request.page {
            self.dashboard.set_page(page).await;
        }

        let page = self.dashboard.current_page().await;
        let stats = self.dashboard.stats().await;
        Ok(OrderPageResponse::from_page(page, stats))
    }

    pub async fn update_status(&self, request: UpdateOrderStatusRequest) -> ApiResponse<OrderStats> {
        ApiResponse::from_result(self.update_status_inner(request).await)
    }

    async fn update_status_inner(
        &self,
        request: UpdateOrderStatusRequest,
    ) -> Result<OrderStats, AppError> {
        request.validate().map_err(AppError::ValidationError)?;
        ensure_can_update_status(self.dashboard.scope())?;
        let status = parse_status(&request.status).map_err(AppError::ValidationError)?;
        self.dashboard.update_status(&request.order_id, status).await?;
        Ok(self.dashboard.stats().await)
    }

    pub async fn cancel(&self, order_id: &str) -> ApiResponse<OrderStats> {
        ApiResponse::from_result(self.cancel_inner(order_id).await)
    }

    async fn cancel_inner(&self, order_id: &str) -> Result<OrderStats, AppError> {
        if order_id.trim().is_empty() {
            return Err(AppError::ValidationError("Order id is required".to_string()));
        }
        self.dashboard.cancel(order_id).await?;
        Ok(self.dashboard.stats().await)
    }

    pub async fn bulk_update(&self, request: BulkStatusRequest) -> ApiResponse<BulkStatusResponse> {
        ApiResponse::from_result(self.bulk_update_inner(request).await)
    }

    async fn bulk_update_inner(
        &self,
        request: BulkStatusRequest,
    ) -> Result<BulkStatusResponse, AppError> {
        request.validate().map_err(AppError::ValidationError)?;
        ensure_can_update_status(self.dashboard.scope())?;
        let status = parse_status(&request.status).map_err(AppError::ValidationError)?;
        let outcome = self
            .dashboard
            .bulk_update_status(&request.order_ids, status)
            .await;
        Ok(BulkStatusResponse {
            requested: outcome.requested,
            succeeded: outcome.succeeded,
            summary: outcome.summary(),
            failed_ids: outcome.failed_ids,
        })
    }
}

/// Status writes belong to the admin and vendor dashboards; customers
/// only get the cancel action on their own orders.
fn ensure_can_update_status(scope: &AccessScope) -> Result<(), AppError> {
    match scope {
        AccessScope::Admin | AccessScope::Vendor { .. } => Ok(()),
        AccessScope::Customer { .. } => Err(AppError::Unauthorized(
            "Customers cannot change order status".to_string(),
        )),
    }
}

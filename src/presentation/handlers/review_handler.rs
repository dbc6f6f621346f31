use crate::application::ports::marketplace_gateway::AccessScope;
use crate::application::services::listing::ReviewSortKey;
use crate::application::services::review_dashboard::ReviewDashboard;
use crate::domain::entities::ReviewStats;
use crate::presentation::dto::review_dto::{
    parse_moderation_action, ModerateReviewRequest, ReplyReviewRequest, ReviewListRequest,
    ReviewPageResponse,
};
use crate::presentation::dto::{ApiResponse, Validate};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Entry points for the review listings and the admin moderation queue.
pub struct ReviewHandler {
    dashboard: Arc<ReviewDashboard>,
}

impl ReviewHandler {
    pub fn new(dashboard: Arc<ReviewDashboard>) -> Self {
        Self { dashboard }
    }

    pub async fn refresh(&self) -> ApiResponse<ReviewStats> {
        ApiResponse::from_result(self.refresh_inner().await)
    }

    async fn refresh_inner(&self) -> Result<ReviewStats, AppError> {
        self.dashboard.refresh().await?;
        Ok(self.dashboard.stats().await)
    }

    pub async fn list(&self, request: ReviewListRequest) -> ApiResponse<ReviewPageResponse> {
        ApiResponse::from_result(self.list_inner(request).await)
    }

    async fn list_inner(&self, request: ReviewListRequest) -> Result<ReviewPageResponse, AppError> {
        request.validate().map_err(AppError::ValidationError)?;
        let sort = ReviewSortKey::try_from_str(request.sort.as_deref())?;

        self.dashboard.set_filter(request.to_filter()).await;
        self.dashboard.set_sort(sort).await;
        if let Some(page) = request.page {
            self.dashboard.set_page(page).await;
        }

        let page = self.dashboard.current_page().await;
        let stats = self.dashboard.stats().await;
        Ok(ReviewPageResponse::from_page(page, stats))
    }

    /// Approve, reject, flag or unflag. Admin only.
    pub async fn moderate(&self, request: ModerateReviewRequest) -> ApiResponse<ReviewStats> {
        ApiResponse::from_result(self.moderate_inner(request).await)
    }

    async fn moderate_inner(&self, request: ModerateReviewRequest) -> Result<ReviewStats, AppError> {
        request.validate().map_err(AppError::ValidationError)?;
        ensure_admin(self.dashboard.scope())?;
        let status = parse_moderation_action(&request.action).map_err(AppError::ValidationError)?;
        self.dashboard.set_moderation(&request.review_id, status).await?;
        Ok(self.dashboard.stats().await)
    }

    pub async fn reply(&self, request: ReplyReviewRequest) -> ApiResponse<ReviewStats> {
        ApiResponse::from_result(self.reply_inner(request).await)
    }

    async fn reply_inner(&self, request: ReplyReviewRequest) -> Result<ReviewStats, AppError> {
        request.validate().map_err(AppError::ValidationError)?;
        ensure_admin(self.dashboard.scope())?;
        self.dashboard.reply(&request.review_id, &request.reply).await?;
        Ok(self.dashboard.stats().await)
    }

    pub async fn delete(&self, review_id: &str) -> ApiResponse<ReviewStats> {
        ApiResponse::from_result(self.delete_inner(review_id).await)
    }

    async fn delete_inner(&self, review_id: &str) -> Result<ReviewStats, AppError> {
        if review_id.trim().is_empty() {
            return Err(AppError::ValidationError("Review id is required".to_string()));
        }
        ensure_admin(self.dashboard.scope())?;
        self.dashboard.delete(review_id).await?;
        Ok(self.dashboard.stats().await)
    }
}

/// Moderation endpoints are admin-only; vendors and customers get
/// read-only review listings in their own scope.
fn ensure_admin(scope: &AccessScope) -> Result<(), AppError> {
    if scope.is_admin() {
        Ok(())
    } else {
        Err(AppError::Unauthorized(
            "Review moderation requires the admin role".to_string(),
        ))
    }
}

use super::enrichment_service::EnrichmentService;
use super::listing::{self, Paged, ReviewFilter, ReviewSortKey};
use crate::application::ports::marketplace_gateway::{AccessScope, MarketplaceGateway};
use crate::domain::entities::{ModerationStatus, Review, ReviewStats};
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

struct DashboardState {
    reviews: Vec<Review>,
    filter: ReviewFilter,
    sort: ReviewSortKey,
    page: usize,
    stats: ReviewStats,
}

/// Review listing and moderation engine. Admin moderates everything; a
/// vendor sees reviews of its own products; a customer sees reviews they
/// wrote. The sentiment bucket is derived from the rating at display
/// time and is independent of moderation.
pub struct ReviewDashboard {
    scope: AccessScope,
    gateway: Arc<dyn MarketplaceGateway>,
    enrichment: Arc<EnrichmentService>,
    page_size: usize,
    state: RwLock<DashboardState>,
}

impl ReviewDashboard {
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
                reviews: Vec::new(),
                filter: ReviewFilter::default(),
                sort: ReviewSortKey::default(),
                page: 1,
                stats: ReviewStats::default(),
            }),
        }
    }

    pub fn scope(&self) -> &AccessScope {
        &self.scope
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let mut reviews = self.gateway.list_reviews(&self.scope).await?;
        self.enrichment.enrich_reviews(&mut reviews).await;
        let stats = ReviewStats::collect(&reviews);

        let mut state = self.state.write().await;
        state.reviews = reviews;
        state.stats = stats;
        Ok(())
    }

    pub async fn current_page(&self) -> Paged<Review> {
        let state = self.state.read().await;
        let mut filtered = listing::filter_reviews(&state.reviews, &state.filter);
        listing::sort_reviews(&mut filtered, state.sort);
        listing::paginate(&filtered, state.page, self.page_size)
    }

    pub async fn stats(&self) -> ReviewStats {
        let state = self.state.read().await;
        state.stats
    }

    pub async fn set_filter(&self, filter: ReviewFilter) {
        let mut state = self.state.write().await;
        state.filter = filter;
        state.page = 1;
    }

    pub async fn set_sort(&self, sort: ReviewSortKey) {
        let mut state = self.state.write().await;
        state.sort = sort;
        state.page = 1;
    }

    pub async fn set_page(&self, page: usize) {
        let mut state = self.state.write().await;
        state.page = page.max(1);
    }

    /// Covers approve, reject, flag and unflag; the backend accepts any
    /// moderation value at any time.
    pub async fn set_moderation(
        &self,
        review_id: &str,
        status: ModerationStatus,
    ) -> Result<(), AppError> {
        self.gateway.set_review_moderation(review_id, status).await?;
        let mut state = self.state.write().await;
        for review in state.reviews.iter_mut() {
            if review.id == review_id {
                review.moderation = status;
            }
        }
        state.stats = ReviewStats::collect(&state.reviews);
        Ok(())
    }

    pub async fn reply(&self, review_id: &str, reply: &str) -> Result<(), AppError> {
        self.gateway.reply_to_review(review_id, reply).await?;
        let mut state = self.state.write().await;
        for review in state.reviews.iter_mut() {
            if review.id == review_id {
                review.reply = Some(reply.to_string());
            }
        }
        Ok(())
    }

    pub async fn delete(&self, review_id: &str) -> Result<(), AppError> {
        self.gateway.delete_review(review_id).await?;
        let mut state = self.state.write().await;
        state.reviews.retain(|review| review.id != review_id);
        state.stats = ReviewStats::collect(&state.reviews);
        Ok(())
    }
}

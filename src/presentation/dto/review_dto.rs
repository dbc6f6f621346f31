use super::Validate;
use crate::application::services::listing::{Paged, ReviewFilter, ReviewSortKey};
use crate::domain::entities::{ModerationStatus, Review, ReviewStats, Sentiment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub fn parse_sentiment(raw: &str) -> Result<Sentiment, String> {
    match raw.trim().to_lowercase().as_str() {
        "positive" => Ok(Sentiment::Positive),
        "neutral" => Ok(Sentiment::Neutral),
        "negative" => Ok(Sentiment::Negative),
        other => Err(format!("Unknown sentiment '{other}'")),
    }
}

pub fn parse_moderation(raw: &str) -> Result<ModerationStatus, String> {
    match raw.trim().to_uppercase().as_str() {
        "PENDING" => Ok(ModerationStatus::Pending),
        "APPROVED" => Ok(ModerationStatus::Approved),
        "REJECTED" => Ok(ModerationStatus::Rejected),
        "FLAGGED" => Ok(ModerationStatus::Flagged),
        other => Err(format!("Unknown moderation status '{other}'")),
    }
}

/// Moderation action as the UI sends it. Unflag returns the review to
/// the pending queue.
pub fn parse_moderation_action(raw: &str) -> Result<ModerationStatus, String> {
    match raw.trim().to_lowercase().as_str() {
        "approve" => Ok(ModerationStatus::Approved),
        "reject" => Ok(ModerationStatus::Rejected),
        "flag" => Ok(ModerationStatus::Flagged),
        "unflag" => Ok(ModerationStatus::Pending),
        other => Err(format!("Unknown moderation action '{other}'")),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewListRequest {
    pub search: Option<String>,
    pub rating: Option<u8>,
    pub sentiment: Option<String>,
    pub moderation: Option<String>,
    pub vendor_id: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

impl Validate for ReviewListRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err("Rating must be between 1 and 5".to_string());
            }
        }
        if let Some(sentiment) = &self.sentiment {
            parse_sentiment(sentiment)?;
        }
        if let Some(moderation) = &self.moderation {
            parse_moderation(moderation)?;
        }
        if ReviewSortKey::try_from_str(self.sort.as_deref()).is_err() {
            return Err(format!("Unknown sort key '{:?}'", self.sort));
        }
        if self.page == Some(0) {
            return Err("Page numbers start at 1".to_string());
        }
        Ok(())
    }
}

impl ReviewListRequest {
    pub fn to_filter(&self) -> ReviewFilter {
        ReviewFilter {
            search: self.search.clone(),
            rating: self.rating,
            sentiment: self.sentiment.as_deref().and_then(|s| parse_sentiment(s).ok()),
            moderation: self
                .moderation
                .as_deref()
                .and_then(|s| parse_moderation(s).ok()),
            vendor_id: self.vendor_id.clone(),
            created_after: self.created_after,
            created_before: self.created_before,
        }
    }
}

/// Display row; the sentiment bucket is derived from the rating here,
/// at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRow {
    pub id: String,
    pub rating: u8,
    pub sentiment: Sentiment,
    pub comment: String,
    pub customer_name: String,
    pub product_name: String,
    pub moderation: ModerationStatus,
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewRow {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            rating: review.rating,
            sentiment: review.sentiment(),
            comment: review.comment.clone(),
            customer_name: review.customer_display_name().to_string(),
            product_name: review.product_name.clone(),
            moderation: review.moderation,
            reply: review.reply.clone(),
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewPageResponse {
    pub rows: Vec<ReviewRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub stats: ReviewStats,
}

impl ReviewPageResponse {
    pub fn from_page(page: Paged<Review>, stats: ReviewStats) -> Self {
        Self {
            rows: page.items.iter().map(ReviewRow::from).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerateReviewRequest {
    pub review_id: String,
    pub action: String,
}

impl Validate for ModerateReviewRequest {
    fn validate(&self) -> Result<(), String> {
        if self.review_id.trim().is_empty() {
            return Err("Review id is required".to_string());
        }
        parse_moderation_action(&self.action)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyReviewRequest {
    pub review_id: String,
    pub reply: String,
}

impl Validate for ReplyReviewRequest {
    fn validate(&self) -> Result<(), String> {
        if self.review_id.trim().is_empty() {
            return Err("Review id is required".to_string());
        }
        if self.reply.trim().is_empty() {
            return Err("Reply must not be empty".to_string());
        }
        if self.reply.len() > 2000 {
            return Err("Reply is too long (max 2000 characters)".to_string());
        }
        Ok(())
    }
}

use super::profile::CustomerProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation state, independent of the sentiment bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl ModerationStatus {
    pub fn from_backend(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "APPROVED" => ModerationStatus::Approved,
            "REJECTED" => ModerationStatus::Rejected,
            "FLAGGED" => ModerationStatus::Flagged,
            _ => ModerationStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "PENDING",
            ModerationStatus::Approved => "APPROVED",
            ModerationStatus::Rejected => "REJECTED",
            ModerationStatus::Flagged => "FLAGGED",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived at display time from the rating, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 4 {
            Sentiment::Positive
        } else if rating <= 2 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub customer_id: String,
    pub product_id: String,
    pub product_name: String,
    pub vendor_id: String,
    pub moderation: ModerationStatus,
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Display projection applied by enrichment; `None` until looked up.
    pub customer: Option<CustomerProfile>,
}

impl Review {
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_rating(self.rating)
    }

    pub fn customer_display_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewStats {
    pub total_reviews: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub flagged: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub average_rating: f64,
}

impl ReviewStats {
    pub fn collect(reviews: &[Review]) -> Self {
        let mut stats = ReviewStats {
            total_reviews: reviews.len(),
            ..Default::default()
        };
        let mut rating_sum = 0u64;
        for review in reviews {
            match review.moderation {
                ModerationStatus::Pending => stats.pending += 1,
                ModerationStatus::Approved => stats.approved += 1,
                ModerationStatus::Rejected => stats.rejected += 1,
                ModerationStatus::Flagged => stats.flagged += 1,
            }
            match review.sentiment() {
                Sentiment::Positive => stats.positive += 1,
                Sentiment::Neutral => stats.neutral += 1,
                Sentiment::Negative => stats.negative += 1,
            }
            rating_sum += review.rating as u64;
        }
        if !reviews.is_empty() {
            stats.average_rating = rating_sum as f64 / reviews.len() as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8, moderation: ModerationStatus) -> Review {
        Review {
            id: "r1".to_string(),
            rating,
            comment: "fine work".to_string(),
            customer_id: "c1".to_string(),
            product_id: "p1".to_string(),
            product_name: "Madhubani painting".to_string(),
            vendor_id: "v1".to_string(),
            moderation,
            reply: None,
            created_at: Utc::now(),
            customer: None,
        }
    }

    #[test]
    fn sentiment_thresholds() {
        assert_eq!(Sentiment::from_rating(5), Sentiment::Positive);
        assert_eq!(Sentiment::from_rating(4), Sentiment::Positive);
        assert_eq!(Sentiment::from_rating(3), Sentiment::Neutral);
        assert_eq!(Sentiment::from_rating(2), Sentiment::Negative);
        assert_eq!(Sentiment::from_rating(1), Sentiment::Negative);
    }

    #[test]
    fn unknown_moderation_is_pending() {
        assert_eq!(ModerationStatus::from_backend("approved"), ModerationStatus::Approved);
        assert_eq!(ModerationStatus::from_backend("whatever"), ModerationStatus::Pending);
        assert_eq!(ModerationStatus::from_backend(""), ModerationStatus::Pending);
    }

    #[test]
    fn stats_bucket_by_moderation_and_sentiment() {
        let reviews = vec![
            review(5, ModerationStatus::Approved),
            review(1, ModerationStatus::Flagged),
            review(3, ModerationStatus::Pending),
        ];
        let stats = ReviewStats::collect(&reviews);
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.flagged, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.positive, 1);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.neutral, 1);
        assert!((stats.average_rating - 3.0).abs() < f64::EPSILON);
    }
}

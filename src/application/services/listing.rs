use crate::domain::entities::{ModerationStatus, Order, OrderStatus, Review, Sentiment};
use crate::shared::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sort order for the order dashboards. Ties keep the original array
/// order; the underlying sort is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderSortKey {
    Newest,
    Oldest,
    AmountHigh,
    AmountLow,
}

impl OrderSortKey {
    pub fn try_from_str(value: Option<&str>) -> Result<Self> {
        match value.unwrap_or("newest").to_lowercase().as_str() {
            "newest" => Ok(OrderSortKey::Newest),
            "oldest" => Ok(OrderSortKey::Oldest),
            "amount-high" => Ok(OrderSortKey::AmountHigh),
            "amount-low" => Ok(OrderSortKey::AmountLow),
            other => Err(AppError::InvalidInput(format!(
                "Unsupported sort key: {other}"
            ))),
        }
    }
}

impl Default for OrderSortKey {
    fn default() -> Self {
        OrderSortKey::Newest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewSortKey {
    Newest,
    Oldest,
    RatingHigh,
    RatingLow,
}

impl ReviewSortKey {
    pub fn try_from_str(value: Option<&str>) -> Result<Self> {
        match value.unwrap_or("newest").to_lowercase().as_str() {
            "newest" => Ok(ReviewSortKey::Newest),
            "oldest" => Ok(ReviewSortKey::Oldest),
            "rating-high" => Ok(ReviewSortKey::RatingHigh),
            "rating-low" => Ok(ReviewSortKey::RatingLow),
            other => Err(AppError::InvalidInput(format!(
                "Unsupported sort key: {other}"
            ))),
        }
    }
}

impl Default for ReviewSortKey {
    fn default() -> Self {
        ReviewSortKey::Newest
    }
}

/// Optional predicates, rebuilt from scratch on every filter change. No
/// persistence, no incremental indexing; the whole collection is
/// re-filtered each time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
    pub vendor_id: Option<String>,
    pub placed_after: Option<DateTime<Utc>>,
    pub placed_before: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub search: Option<String>,
    pub rating: Option<u8>,
    pub sentiment: Option<Sentiment>,
    pub moderation: Option<ModerationStatus>,
    pub vendor_id: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn order_matches(order: &Order, filter: &OrderFilter) -> bool {
    if let Some(status) = filter.status {
        if order.status != status {
            return false;
        }
    }
    if let Some(vendor_id) = &filter.vendor_id {
        if &order.vendor_id != vendor_id {
            return false;
        }
    }
    if let Some(after) = filter.placed_after {
        if order.placed_at < after {
            return false;
        }
    }
    if let Some(before) = filter.placed_before {
        if order.placed_at > before {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_customer = order
                .customer
                .as_ref()
                .map(|c| contains_ci(&c.name, &needle) || contains_ci(&c.email, &needle))
                .unwrap_or(false);
            let in_items = order
                .items
                .iter()
                .any(|item| contains_ci(&item.product_name, &needle));
            if !contains_ci(&order.id, &needle) && !in_customer && !in_items {
                return false;
            }
        }
    }
    true
}

fn review_matches(review: &Review, filter: &ReviewFilter) -> bool {
    if let Some(rating) = filter.rating {
        if review.rating != rating {
            return false;
        }
    }
    if let Some(sentiment) = filter.sentiment {
        if review.sentiment() != sentiment {
            return false;
        }
    }
    if let Some(moderation) = filter.moderation {
        if review.moderation != moderation {
            return false;
        }
    }
    if let Some(vendor_id) = &filter.vendor_id {
        if &review.vendor_id != vendor_id {
            return false;
        }
    }
    if let Some(after) = filter.created_after {
        if review.created_at < after {
            return false;
        }
    }
    if let Some(before) = filter.created_before {
        if review.created_at > before {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_customer = review
                .customer
                .as_ref()
                .map(|c| contains_ci(&c.name, &needle))
                .unwrap_or(false);
            if !contains_ci(&review.comment, &needle)
                && !contains_ci(&review.product_name, &needle)
                && !in_customer
            {
                return false;
            }
        }
    }
    true
}

pub fn filter_orders(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order_matches(order, filter))
        .cloned()
        .collect()
}

pub fn sort_orders(orders: &mut [Order], sort: OrderSortKey) {
    match sort {
        OrderSortKey::Newest => orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at)),
        OrderSortKey::Oldest => orders.sort_by(|a, b| a.placed_at.cmp(&b.placed_at)),
        OrderSortKey::AmountHigh => {
            orders.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal))
        }
        OrderSortKey::AmountLow => {
            orders.sort_by(|a, b| a.total.partial_cmp(&b.total).unwrap_or(std::cmp::Ordering::Equal))
        }
    }
}

pub fn filter_reviews(reviews: &[Review], filter: &ReviewFilter) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review_matches(review, filter))
        .cloned()
        .collect()
}

pub fn sort_reviews(reviews: &mut [Review], sort: ReviewSortKey) {
    match sort {
        ReviewSortKey::Newest => reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ReviewSortKey::Oldest => reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ReviewSortKey::RatingHigh => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSortKey::RatingLow => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
    }
}

/// One page of a filtered collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slices a page out of the filtered collection. The requested page is
/// clamped to `[1, total_pages]`; an empty collection still reports one
/// (empty) page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paged<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = (total_items.div_ceil(page_size)).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let slice = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Paged {
        items: slice,
        page,
        page_size,
        total_pages,
        total_items,
    }
}

use super::Validate;
use crate::application::services::listing::{OrderFilter, OrderSortKey, Paged};
use crate::domain::entities::{Order, OrderStats, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const KNOWN_STATUSES: [&str; 4] = ["pending", "dispatched", "delivered", "cancelled"];

/// Strict parse for UI-supplied status values. Unlike the backend
/// normalizer, an unknown filter value is rejected instead of silently
/// bucketed.
pub fn parse_status(raw: &str) -> Result<OrderStatus, String> {
    match raw.trim().to_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "dispatched" => Ok(OrderStatus::Dispatched),
        "delivered" => Ok(OrderStatus::Delivered),
        "cancelled" => Ok(OrderStatus::Cancelled),
        other => Err(format!(
            "Unknown status '{other}', expected one of {KNOWN_STATUSES:?}"
        )),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListRequest {
    pub search: Option<String>,
    pub status: Option<String>,
    pub vendor_id: Option<String>,
    pub placed_after: Option<DateTime<Utc>>,
    pub placed_before: Option<DateTime<Utc>>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

impl Validate for OrderListRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(status) = &self.status {
            parse_status(status)?;
        }
        if OrderSortKey::try_from_str(self.sort.as_deref()).is_err() {
            return Err(format!("Unknown sort key '{:?}'", self.sort));
        }
        if self.page == Some(0) {
            return Err("Page numbers start at 1".to_string());
        }
        Ok(())
    }
}

impl OrderListRequest {
    pub fn to_filter(&self) -> OrderFilter {
        OrderFilter {
            search: self.search.clone(),
            status: self.status.as_deref().and_then(|s| parse_status(s).ok()),
            vendor_id: self.vendor_id.clone(),
            placed_after: self.placed_after,
            placed_before: self.placed_before,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRow {
    pub product_id: String,
    pub product_name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Display row: normalized statuses plus the enriched account fields.
/// Blank strings mean the enrichment lookup failed for this session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_avatar: Option<String>,
    pub vendor_name: String,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: String,
    pub payment_method: String,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItemRow>,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer_name: order.customer_display_name().to_string(),
            customer_email: order
                .customer
                .as_ref()
                .map(|c| c.email.clone())
                .unwrap_or_default(),
            customer_avatar: order.customer.as_ref().and_then(|c| c.avatar_url.clone()),
            vendor_name: order.vendor_display_name().to_string(),
            total: order.total,
            status: order.status,
            payment_status: order.payment_status.as_str().to_string(),
            payment_method: order.payment_method.clone(),
            placed_at: order.placed_at,
            items: order
                .items
                .iter()
                .map(|item| OrderItemRow {
                    product_id: item.product_id.clone(),
                    product_name: item.product_name.clone(),
                    image_url: item.image_url.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderPageResponse {
    pub rows: Vec<OrderRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub stats: OrderStats,
}

impl OrderPageResponse {
    pub fn from_page(page: Paged<Order>, stats: OrderStats) -> Self {
        Self {
            rows: page.items.iter().map(OrderRow::from).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub status: String,
}

impl Validate for UpdateOrderStatusRequest {
    fn validate(&self) -> Result<(), String> {
        if self.order_id.trim().is_empty() {
            return Err("Order id is required".to_string());
        }
        parse_status(&self.status)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusRequest {
    pub order_ids: Vec<String>,
    pub status: String,
}

impl Validate for BulkStatusRequest {
    fn validate(&self) -> Result<(), String> {
        if self.order_ids.is_empty() {
            return Err("At least one order id is required".to_string());
        }
        if self.order_ids.iter().any(|id| id.trim().is_empty()) {
            return Err("Order ids must not be empty".to_string());
        }
        parse_status(&self.status)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub requested: usize,
    pub succeeded: usize,
    pub failed_ids: Vec<String>,
    /// e.g. "2/3" when one of three writes failed.
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_rejects_unknown_status() {
        let request = OrderListRequest {
            status: Some("refunded".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn list_request_accepts_known_values() {
        let request = OrderListRequest {
            status: Some("Delivered".to_string()),
            sort: Some("amount-low".to_string()),
            page: Some(2),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.to_filter().status, Some(OrderStatus::Delivered));
    }

    #[test]
    fn bulk_request_requires_ids() {
        let request = BulkStatusRequest {
            order_ids: vec![],
            status: "dispatched".to_string(),
        };
        assert!(request.validate().is_err());
    }
}

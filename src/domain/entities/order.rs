use super::profile::{CustomerProfile, VendorProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized order status shown on the dashboards.
///
/// The backend stores free-form strings; everything unrecognized maps to
/// `Pending`, the most conservative bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Dispatched,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn from_backend(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" | "returned" => OrderStatus::Cancelled,
            "shipped" | "out_for_delivery" | "out for delivery" | "dispatched" => {
                OrderStatus::Dispatched
            }
            _ => OrderStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Dispatched => "dispatched",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    /// Substring match, case-insensitive. A raw value matching neither
    /// bucket lands on `Pending` (this includes cash-on-delivery orders,
    /// whose payment method stays on the order as data).
    pub fn from_backend(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.contains("paid") || lowered.contains("success") {
            PaymentStatus::Paid
        } else if lowered.contains("fail") || lowered.contains("refund") {
            PaymentStatus::Failed
        } else {
            PaymentStatus::Pending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub vendor_id: String,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// Raw payment method as reported by the backend (e.g. "cod", "upi").
    pub payment_method: String,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    /// Display projections applied by enrichment; `None` until looked up.
    pub customer: Option<CustomerProfile>,
    pub vendor: Option<VendorProfile>,
}

impl Order {
    pub fn customer_display_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn vendor_display_name(&self) -> &str {
        self.vendor.as_ref().map(|v| v.name.as_str()).unwrap_or("")
    }
}

/// Aggregates recomputed after every load and every successful mutation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderStats {
    pub total_orders: usize,
    pub pending: usize,
    pub dispatched: usize,
    pub delivered: usize,
    pub cancelled: usize,
    /// Sum of totals over non-cancelled orders.
    pub revenue: f64,
}

impl OrderStats {
    pub fn collect(orders: &[Order]) -> Self {
        let mut stats = OrderStats {
            total_orders: orders.len(),
            ..Default::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Dispatched => stats.dispatched += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
            if order.status != OrderStatus::Cancelled {
                stats.revenue += order.total;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, total: f64, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_id: "c1".to_string(),
            vendor_id: "v1".to_string(),
            total,
            status,
            payment_status: PaymentStatus::Pending,
            payment_method: "cod".to_string(),
            placed_at: Utc::now(),
            items: vec![],
            customer: None,
            vendor: None,
        }
    }

    #[test]
    fn dispatched_synonyms_normalize_to_dispatched() {
        for raw in ["Shipped", "out_for_delivery", "dispatched", "Out For Delivery"] {
            assert_eq!(OrderStatus::from_backend(raw), OrderStatus::Dispatched);
        }
    }

    #[test]
    fn cancellation_spellings_normalize_to_cancelled() {
        for raw in ["cancelled", "Canceled", "RETURNED"] {
            assert_eq!(OrderStatus::from_backend(raw), OrderStatus::Cancelled);
        }
    }

    #[test]
    fn unknown_status_falls_back_to_pending() {
        for raw in ["", "processing", "on_hold", "???"] {
            assert_eq!(OrderStatus::from_backend(raw), OrderStatus::Pending);
        }
    }

    #[test]
    fn payment_buckets() {
        assert_eq!(PaymentStatus::from_backend("PAID"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_backend("payment_success"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::from_backend("failed"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::from_backend("refund_issued"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::from_backend("cod"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_backend(""), PaymentStatus::Pending);
    }

    #[test]
    fn stats_exclude_cancelled_revenue() {
        let orders = vec![
            order("o1", 100.0, OrderStatus::Delivered),
            order("o2", 250.0, OrderStatus::Cancelled),
            order("o3", 50.0, OrderStatus::Pending),
        ];
        let stats = OrderStats::collect(&orders);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.revenue, 150.0);
    }
}

use crate::domain::entities::{
    CustomerProfile, ModerationStatus, Order, OrderItem, OrderStatus, PaymentStatus, Product,
    Review, VendorProfile,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Canonical response contract. Older endpoints still answer with the
/// bare payload; `decode_payload` in the client accepts both shapes at a
/// single point.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Order as the backend sends it: free-form status strings, camelCase
/// keys, Mongo-style `_id`. Normalization happens in `into_domain`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub customer_id: String,
    pub vendor_id: String,
    #[serde(alias = "total")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(alias = "placedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItemRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub product_id: String,
    #[serde(alias = "name")]
    pub product_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
    #[serde(alias = "price")]
    pub unit_price: f64,
}

impl OrderRecord {
    pub fn into_domain(self) -> Order {
        Order {
            id: self.id,
            customer_id: self.customer_id,
            vendor_id: self.vendor_id,
            total: self.total_amount,
            status: OrderStatus::from_backend(&self.status),
            payment_status: PaymentStatus::from_backend(&self.payment_status),
            payment_method: self.payment_method,
            placed_at: self.created_at,
            items: self
                .items
                .into_iter()
                .map(|item| OrderItem {
                    product_id: item.product_id,
                    product_name: item.product_name,
                    image_url: item.image_url,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            customer: None,
            vendor: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub rating: u8,
    #[serde(default, alias = "body")]
    pub comment: String,
    pub customer_id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    pub vendor_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn into_domain(self) -> Review {
        Review {
            id: self.id,
            rating: self.rating,
            comment: self.comment,
            customer_id: self.customer_id,
            product_id: self.product_id,
            product_name: self.product_name,
            vendor_id: self.vendor_id,
            moderation: ModerationStatus::from_backend(&self.status),
            reply: self.reply,
            created_at: self.created_at,
            customer: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl CustomerRecord {
    pub fn into_domain(self) -> CustomerProfile {
        CustomerProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "shopName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

impl VendorRecord {
    pub fn into_domain(self) -> VendorProfile {
        VendorProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            logo_url: self.logo_url,
            district: self.district,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub gi_tagged: bool,
    pub vendor_id: String,
    #[serde(default)]
    pub stock: u32,
}

impl ProductRecord {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            district: self.district,
            gi_tagged: self.gi_tagged,
            vendor_id: self.vendor_id,
            stock: self.stock,
        }
    }
}

/// Issued by the auth endpoint; the token rides as a bearer header on
/// every subsequent call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub role: String,
    #[serde(alias = "_id", alias = "id")]
    pub account_id: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_record_normalizes_at_the_edge() {
        let raw = r#"{
            "_id": "ord-1",
            "customerId": "c1",
            "vendorId": "v1",
            "total": 499.0,
            "status": "Shipped",
            "paymentStatus": "payment_success",
            "paymentMethod": "upi",
            "createdAt": "2025-11-02T10:00:00Z",
            "items": [
                {"productId": "p1", "name": "Dhokra figurine", "quantity": 2, "price": 249.5}
            ]
        }"#;
        let record: OrderRecord = serde_json::from_str(raw).unwrap();
        let order = record.into_domain();
        assert_eq!(order.id, "ord-1");
        assert_eq!(order.status, OrderStatus::Dispatched);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn review_record_defaults_moderation_to_pending() {
        let raw = r#"{
            "_id": "rev-1",
            "rating": 5,
            "body": "gorgeous colors",
            "customerId": "c1",
            "productId": "p1",
            "vendorId": "v1",
            "createdAt": "2025-11-02T10:00:00Z"
        }"#;
        let record: ReviewRecord = serde_json::from_str(raw).unwrap();
        let review = record.into_domain();
        assert_eq!(review.moderation, ModerationStatus::Pending);
        assert_eq!(review.comment, "gorgeous colors");
    }
}

pub mod mocks;

use chrono::{DateTime, TimeZone, Utc};
use odop_client::domain::entities::{
    CustomerProfile, ModerationStatus, Order, OrderItem, OrderStatus, PaymentStatus, Review,
    VendorProfile,
};

pub fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

pub fn order(
    id: &str,
    customer_id: &str,
    vendor_id: &str,
    total: f64,
    status: OrderStatus,
    placed_at: i64,
) -> Order {
    Order {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        vendor_id: vendor_id.to_string(),
        total,
        status,
        payment_status: PaymentStatus::Pending,
        payment_method: "cod".to_string(),
        placed_at: ts(placed_at),
        items: vec![OrderItem {
            product_id: format!("p-{id}"),
            product_name: "Warli art canvas".to_string(),
            image_url: None,
            quantity: 1,
            unit_price: total,
        }],
        customer: None,
        vendor: None,
    }
}

pub fn review(
    id: &str,
    customer_id: &str,
    vendor_id: &str,
    rating: u8,
    moderation: ModerationStatus,
    created_at: i64,
) -> Review {
    Review {
        id: id.to_string(),
        rating,
        comment: "beautiful piece".to_string(),
        customer_id: customer_id.to_string(),
        product_id: format!("p-{id}"),
        product_name: "Kalamkari print".to_string(),
        vendor_id: vendor_id.to_string(),
        moderation,
        reply: None,
        created_at: ts(created_at),
        customer: None,
    }
}

pub fn customer(id: &str, name: &str) -> CustomerProfile {
    CustomerProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.in"),
        phone: "9000000000".to_string(),
        avatar_url: None,
    }
}

pub fn vendor(id: &str, name: &str) -> VendorProfile {
    VendorProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@odop.in"),
        phone: "8000000000".to_string(),
        logo_url: None,
        district: Some("Kutch".to_string()),
    }
}

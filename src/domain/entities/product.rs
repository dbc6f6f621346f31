use serde::{Deserialize, Serialize};

/// Catalog entry. The GI tag is data carried for display, not enforced
/// logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub district: String,
    pub gi_tagged: bool,
    pub vendor_id: String,
    pub stock: u32,
}

/// Payload for creating a product through the catalog endpoint. The image
/// travels as a multipart part next to these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub district: String,
    pub gi_tagged: bool,
    pub stock: u32,
}

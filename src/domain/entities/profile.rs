use serde::{Deserialize, Serialize};

/// Small projection of a customer account, cached for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: Option<String>,
}

impl CustomerProfile {
    /// Placeholder stored when a lookup fails; keeps the display fields
    /// blank for the rest of the session without retrying.
    pub fn blank(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            avatar_url: None,
        }
    }
}

/// Small projection of a vendor account, cached for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub logo_url: Option<String>,
    pub district: Option<String>,
}

impl VendorProfile {
    pub fn blank(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            logo_url: None,
            district: None,
        }
    }
}

pub mod marketplace_gateway;
pub mod profile_store;

pub use marketplace_gateway::{AccessScope, ImageUpload, MarketplaceGateway};
pub use profile_store::ProfileStore;

use super::models::{
    AuthSession, CustomerRecord, Envelope, OrderRecord, ProductRecord, ReviewRecord, VendorRecord,
};
use crate::application::ports::marketplace_gateway::{
    AccessScope, ImageUpload, MarketplaceGateway,
};
use crate::domain::entities::{
    CustomerProfile, ModerationStatus, NewProduct, Order, OrderStatus, Product, Review,
    VendorProfile,
};
use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("backend rejected the request: {0}")]
    Rejected(String),

    #[error("unexpected response shape: {0}")]
    Decode(String),

    #[error("server error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("invalid base url: {0}")]
    BaseUrl(String),
}

impl From<ApiClientError> for AppError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Transport(inner) => AppError::Network(inner.to_string()),
            ApiClientError::NotFound(msg) => AppError::NotFound(msg),
            ApiClientError::Unauthorized(msg) => AppError::Unauthorized(msg),
            ApiClientError::Rejected(msg) => AppError::Backend(msg),
            ApiClientError::Decode(msg) => AppError::DeserializationError(msg),
            ApiClientError::Status { status, body } => {
                AppError::Network(format!("server error ({status}): {body}"))
            }
            ApiClientError::BaseUrl(msg) => AppError::ConfigurationError(msg),
        }
    }
}

/// Decodes a response body. The `{success, message, data}` envelope is
/// the canonical contract; a bare payload is accepted as the legacy
/// fallback. This is the only place in the client that guesses.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiClientError> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) {
        if !envelope.success {
            return Err(ApiClientError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        if let Some(data) = envelope.data {
            return Ok(data);
        }
        return Err(ApiClientError::Decode(
            "envelope is missing the data field".to_string(),
        ));
    }
    serde_json::from_str::<T>(body).map_err(|err| ApiClientError::Decode(err.to_string()))
}

fn normalize_base_url(raw: &str) -> Result<String, ApiClientError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let url = Url::parse(&trimmed).map_err(|err| ApiClientError::BaseUrl(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed),
        other => Err(ApiClientError::BaseUrl(format!(
            "scheme must be http or https, got {other}"
        ))),
    }
}

fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// reqwest adapter for the marketplace REST surface. Holds the session
/// bearer token; no retry and no backoff, failures surface immediately.
pub struct RestApiClient {
    base_url: String,
    client: Client,
    token: RwLock<Option<String>>,
}

impl RestApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|err| AppError::ConfigurationError(err.to_string()))?;
        Ok(Self {
            base_url,
            client,
            token: RwLock::new(None),
        })
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<AuthSession, AppError> {
        let builder = self
            .client
            .post(build_url(&self.base_url, "/auth/login"))
            .json(&json!({ "email": email, "password": password, "role": role }));
        let session: AuthSession = execute(builder).await?;
        let mut token = self.token.write().await;
        *token = Some(session.token.clone());
        Ok(session)
    }

    pub async fn logout(&self) {
        let mut token = self.token.write().await;
        *token = None;
    }

    pub async fn has_session(&self) -> bool {
        self.token.read().await.is_some()
    }

    async fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, build_url(&self.base_url, path));
        let token = self.token.read().await;
        match token.as_ref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let builder = self.request(Method::GET, path).await;
        execute(builder).await
    }

    /// Write endpoints answer with an envelope (with or without data) or
    /// a bare acknowledgement; only success matters.
    async fn write(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiClientError> {
        let mut builder = self.request(method, path).await;
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        check_status(status, body.clone())?;
        decode_ack(&body)
    }
}

fn check_status(status: StatusCode, body: String) -> Result<(), ApiClientError> {
    if status == StatusCode::NOT_FOUND {
        return Err(ApiClientError::NotFound(body));
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiClientError::Unauthorized(body));
    }
    if !status.is_success() {
        return Err(ApiClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(())
}

/// Acknowledgement decode for write endpoints: an envelope is checked
/// for `success`; any other 2xx body counts as success.
fn decode_ack(body: &str) -> Result<(), ApiClientError> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        if !envelope.success {
            return Err(ApiClientError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
    }
    Ok(())
}

async fn execute<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
) -> Result<T, ApiClientError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.text().await?;
    check_status(status, body.clone())?;
    decode_payload(&body)
}

#[async_trait]
impl MarketplaceGateway for RestApiClient {
    async fn list_orders(&self, scope: &AccessScope) -> Result<Vec<Order>, AppError> {
        let path = match scope {
            AccessScope::Admin => "/orders".to_string(),
            AccessScope::Vendor { vendor_id } => format!("/vendors/{vendor_id}/orders"),
            AccessScope::Customer { customer_id } => format!("/customers/{customer_id}/orders"),
        };
        let records: Vec<OrderRecord> = self.get_json(&path).await?;
        Ok(records.into_iter().map(OrderRecord::into_domain).collect())
    }

    async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        self.write(
            Method::PUT,
            &format!("/orders/{order_id}/status"),
            Some(json!({ "status": status.as_str() })),
        )
        .await?;
        Ok(())
    }

    async fn cancel_order(&self, order_id: &str) -> Result<(), AppError> {
        self.write(Method::PUT, &format!("/orders/{order_id}/cancel"), None)
            .await?;
        Ok(())
    }

    async fn get_customer(&self, id: &str) -> Result<Option<CustomerProfile>, AppError> {
        match self.get_json::<CustomerRecord>(&format!("/customers/{id}")).await {
            Ok(record) => Ok(Some(record.into_domain())),
            Err(ApiClientError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn get_vendor(&self, id: &str) -> Result<Option<VendorProfile>, AppError> {
        match self.get_json::<VendorRecord>(&format!("/vendors/{id}")).await {
            Ok(record) => Ok(Some(record.into_domain())),
            Err(ApiClientError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn list_reviews(&self, scope: &AccessScope) -> Result<Vec<Review>, AppError> {
        let path = match scope {
            AccessScope::Admin => "/reviews".to_string(),
            AccessScope::Vendor { vendor_id } => format!("/vendors/{vendor_id}/reviews"),
            AccessScope::Customer { customer_id } => format!("/customers/{customer_id}/reviews"),
        };
        let records: Vec<ReviewRecord> = self.get_json(&path).await?;
        Ok(records.into_iter().map(ReviewRecord::into_domain).collect())
    }

    async fn set_review_moderation(
        &self,
        review_id: &str,
        status: ModerationStatus,
    ) -> Result<(), AppError> {
        self.write(
            Method::PUT,
            &format!("/reviews/{review_id}/moderation"),
            Some(json!({ "status": status.as_str() })),
        )
        .await?;
        Ok(())
    }

    async fn reply_to_review(&self, review_id: &str, reply: &str) -> Result<(), AppError> {
        self.write(
            Method::POST,
            &format!("/reviews/{review_id}/reply"),
            Some(json!({ "reply": reply })),
        )
        .await?;
        Ok(())
    }

    async fn delete_review(&self, review_id: &str) -> Result<(), AppError> {
        self.write(Method::DELETE, &format!("/reviews/{review_id}"), None)
            .await?;
        Ok(())
    }

    async fn list_products(&self, vendor_id: Option<String>) -> Result<Vec<Product>, AppError> {
        let path = match vendor_id {
            Some(vendor_id) => format!("/vendors/{vendor_id}/products"),
            None => "/products".to_string(),
        };
        let records: Vec<ProductRecord> = self.get_json(&path).await?;
        Ok(records
            .into_iter()
            .map(ProductRecord::into_domain)
            .collect())
    }

    async fn create_product(
        &self,
        product: &NewProduct,
        image: Option<ImageUpload>,
    ) -> Result<Product, AppError> {
        let mut form = reqwest::multipart::Form::new()
            .text("name", product.name.clone())
            .text("description", product.description.clone())
            .text("price", product.price.to_string())
            .text("district", product.district.clone())
            .text("giTagged", product.gi_tagged.to_string())
            .text("stock", product.stock.to_string());
        if let Some(image) = image {
            let part = reqwest::multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(ApiClientError::Transport)?;
            form = form.part("image", part);
        }
        let builder = self.request(Method::POST, "/products").await.multipart(form);
        let record: ProductRecord = execute(builder).await?;
        Ok(record.into_domain())
    }
}

use anyhow::{Context, Result};
use odop_client::application::ports::marketplace_gateway::AccessScope;
use odop_client::presentation::dto::order_dto::OrderListRequest;
use odop_client::shared::config::AppConfig;
use odop_client::state::AppState;
use std::env;
use tracing::info;

/// One-shot smoke run against a live backend: log in (when credentials
/// are provided), load the admin order dashboard and print the first
/// page with stats.
#[tokio::main]
async fn main() -> Result<()> {
    odop_client::shared::logging::init("dashboard_harness");

    let config = AppConfig::from_env();
    let state = AppState::new(config).context("failed to wire app state")?;

    if let (Ok(email), Ok(password)) = (
        env::var("ODOP_ADMIN_EMAIL"),
        env::var("ODOP_ADMIN_PASSWORD"),
    ) {
        let session = state
            .client
            .login(&email, &password, "admin")
            .await
            .context("admin login failed")?;
        info!(account_id = %session.account_id, "logged in");
    }

    let handler = state.order_handler(AccessScope::Admin);
    let refreshed = handler.refresh().await;
    if !refreshed.success {
        anyhow::bail!(
            "refresh failed: {}",
            refreshed.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let page = handler.list(OrderListRequest::default()).await;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

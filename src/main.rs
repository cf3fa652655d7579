use std::sync::Arc;

use chrono::Utc;
use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use dispatch_admin::collection::{Orders, PartnerRequests, RemoteCollection};
use dispatch_admin::config::Config;
use dispatch_admin::engine::filter::FilterCriteria;
use dispatch_admin::engine::stats::{customers_from_orders, dashboard_stats};
use dispatch_admin::error::AppError;
use dispatch_admin::models::partner::PartnerStatus;
use dispatch_admin::remote::ApiClient;
use dispatch_admin::session::Session;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let session = Arc::new(Session::new());
    let client = Arc::new(ApiClient::new(&config, session.clone())?);

    if let (Some(identifier), Some(password)) = (&config.admin_identifier, &config.admin_password) {
        if let Err(err) = client.login(identifier, password.expose_secret()).await {
            tracing::error!(error = %err, "{}", err.user_message());
            return Err(err);
        }
    } else {
        tracing::warn!("ADMIN_IDENTIFIER/ADMIN_PASSWORD not set; continuing without signing in");
    }

    let mut orders: RemoteCollection<Orders> = RemoteCollection::new(client.clone());
    let mut partners: RemoteCollection<PartnerRequests> = RemoteCollection::new(client.clone());

    let (order_result, partner_result) = tokio::join!(orders.refresh(), partners.refresh());
    order_result?;
    partner_result?;

    let stats = dashboard_stats(orders.items(), Utc::now());
    tracing::info!(
        orders_today = stats.orders_today,
        pending_pickups = stats.pending_pickups,
        out_for_delivery = stats.out_for_delivery,
        delivered = stats.delivered,
        cancelled = stats.cancelled,
        "dashboard"
    );

    let customers = customers_from_orders(orders.items());
    tracing::info!(customers = customers.len(), "customers loaded");

    partners.set_criteria(FilterCriteria::default().with_status(PartnerStatus::Pending));
    let pending = partners.view();
    tracing::info!(
        pending = pending.len(),
        total = partners.items().len(),
        "partner requests awaiting review"
    );

    match client.metrics().encode() {
        Ok(body) => tracing::debug!(metrics = %body, "request metrics"),
        Err(err) => tracing::warn!(error = %err, "failed to encode metrics"),
    }

    Ok(())
}

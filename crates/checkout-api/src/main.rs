//! # Ricijo Checkout
//!
//! Stripe checkout session service.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export PUBLIC_URL=https://loja.example.com
//!
//! # Run the server
//! checkout-server
//! ```

use checkout_api::{routes, AppConfig, AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    info!("Environment: {}", config.environment);
    info!(
        "PUBLIC_URL: {}",
        if config.public_url.is_some() { "configured" } else { "not configured" }
    );
    info!("Currency: {}", config.currency);

    match &config.stripe {
        Some(stripe) => {
            let mode = if stripe.is_live_mode() {
                "live"
            } else if stripe.is_test_mode() {
                "test"
            } else {
                "unknown"
            };
            info!(mode, api_base_url = %stripe.api_base_url, "STRIPE_SECRET_KEY: configured");
            if is_prod && !stripe.is_live_mode() {
                warn!("Production environment is not using a live Stripe key");
            }
        }
        None => warn!("STRIPE_SECRET_KEY: not configured, checkouts will fail"),
    }

    let state = AppState::new(config)?;

    let app = routes::create_router(state);

    info!("Checkout service starting on http://{}", addr);

    if !is_prod {
        info!("Checkout: POST http://{}/api/create-stripe-checkout", addr);
        info!("Index: GET http://{}/api", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

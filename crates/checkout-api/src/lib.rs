//! # checkout-api
//!
//! HTTP API layer for the ricijo checkout service.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api`, `/api/index` | Endpoint discovery |
//! | POST | `/api/create-stripe-checkout` | Create checkout session (detailed logging) |
//! | POST | `/api/create_stripe_checkout` | Create checkout session |
//!
//! Checkout endpoints answer `OPTIONS` with an empty 200 and every other
//! method with 405. All responses carry the same CORS headers.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};

//! Event Ticketing Front End
//!
//! A server-rendered UI for the ticketing API: sign in by first name, browse and
//! search events, inspect revenue and staffing, and book tickets.

mod api;
mod config;
mod controller;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod ui;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::ApiClient;
use config::Config;
use controller::Controller;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Controller,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let api = ApiClient::new(config.api_base_url.clone());
        Self {
            controller: Controller::new(api, config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting event ticketing front end");
    tracing::info!("Ticketing API: {}", config.api_base_url);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Login fallback: {:?}", config.login_fallback);

    if config.login_fallback == config::LoginFallback::FirstUser {
        tracing::warn!(
            "Unknown first names sign in as the first user (TICKETING_LOGIN_FALLBACK=first-user)"
        );
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Front end listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the front-end router with all routes.
pub fn create_router(state: AppState) -> Router {
    let ui_routes = Router::new()
        .route("/", get(routes::index))
        // Session
        .route("/login", post(routes::login))
        .route("/signup", post(routes::signup))
        .route("/logout", post(routes::logout))
        // Events
        .route("/dashboard", get(routes::dashboard))
        .route("/search", get(routes::search))
        .route("/events/{id}", get(routes::show_event))
        // Booking
        .route("/events/{id}/book", get(routes::open_booking))
        .route("/booking", post(routes::submit_booking))
        .route("/booking/ticket-type", post(routes::change_ticket_type))
        .route("/booking/cancel", post(routes::cancel_booking));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(ui_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

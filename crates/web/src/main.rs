//! VetX Web - Public site and admin panel.
//!
//! This binary serves the VetX Pharma marketing site and the password-gated
//! admin panel on a single port (default 3000).
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for the live product search
//! - Askama templates for server-side rendering
//! - `vetx-store` for all state: catalog, company profile, auth flag
//!
//! State lives in-process. Nothing survives a restart except the persisted
//! auth flag, a single file under `VETX_STATE_DIR`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use secrecy::SecretString;
use sentry::integrations::tracing as sentry_tracing;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vetx_store::{FileAuthMirror, Store};
use vetx_web::config::SiteConfig;
use vetx_web::routes;
use vetx_web::state::AppState;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &SiteConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vetx_web=info,vetx_store=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Build the store: seeded defaults, auth restored from the mirror file
    let mirror = FileAuthMirror::new(&config.state_dir);
    let password: SecretString = config.admin_password.clone();
    let store = Store::new(password, Box::new(mirror));
    tracing::info!(
        products = store.products().len(),
        authenticated = store.is_authenticated(),
        "store seeded"
    );

    // Build application state
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/web/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("site listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

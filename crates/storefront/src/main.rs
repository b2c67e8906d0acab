//! Brightcart Storefront - catalog and cart JSON API.
//!
//! Serves the routes in [`brightcart_storefront::routes`] on
//! `STOREFRONT_HOST:STOREFRONT_PORT` (127.0.0.1:3000 by default).
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - One in-memory [`Store`](brightcart_storefront::store::Store) per process,
//!   seeded from the compiled-in mock catalog or `STOREFRONT_CATALOG_PATH`
//! - No database and no persistence: restarting the process empties the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use brightcart_storefront::config::StorefrontConfig;
use brightcart_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "brightcart_storefront=info,tower_http=debug";

/// Start Sentry when `SENTRY_DSN` is configured. Keep the guard alive for
/// the lifetime of the process; dropping it flushes pending events.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;
    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config.sentry_environment.clone().map(Into::into),
        sample_rate: config.sentry_sample_rate,
        traces_sample_rate: config.sentry_traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    };
    Some(sentry::init((dsn, options)))
}

/// Warnings and errors become Sentry events, info and debug breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        Level::ERROR | Level::WARN => sentry_tracing::EventFilter::Event,
        Level::INFO | Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No subscriber yet
            eprintln!("brightcart-storefront: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Sentry before the subscriber so the tracing layer has a client
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Storefront stopped: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr();
    let state = AppState::new(config)?;
    {
        let store = state.store().read().await;
        tracing::info!(products = store.products().len(), "Store initialized");
    }

    let app = brightcart_storefront::app(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Storefront shut down cleanly");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}

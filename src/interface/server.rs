//! HTTP server: routing for both front ends and process bootstrap.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::service::CatalogService;
use crate::config::Config;
use crate::infra::json_store::JsonSeedRepository;

use super::{api, html};

// =============================================================================
// Application State
// =============================================================================

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

// =============================================================================
// Router
// =============================================================================

pub fn build_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let json_routes = Router::new()
        .route("/Livres", get(api::list_books))
        .route("/total_livres", get(api::count_books))
        .route(
            "/livre/{id}",
            get(api::get_book)
                .post(api::create_book)
                .put(api::update_book)
                .delete(api::delete_book),
        );

    let html_routes = Router::new()
        .route("/", get(html::index))
        .route(
            "/ajouter-livre",
            get(html::add_form).post(html::add_book),
        )
        .route(
            "/modifier-livre/{id}",
            get(html::edit_form).post(html::edit_book),
        )
        .route("/supprimer-livre/{id}", get(html::delete_book));

    Router::new()
        .merge(json_routes)
        .merge(html_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(html::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// =============================================================================
// Entry point
// =============================================================================

/// Loads the seed, binds the listener and serves until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let seed = config.seed_file();
    let catalog = CatalogService::open(&JsonSeedRepository::new(seed))
        .with_context(|| format!("failed to load seed {}", seed.display()))?;

    let app = build_app(AppState::new(catalog), &config.static_dir);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server simply runs until killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

use anyhow::{Context, Result};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::layout::STYLESHEET_HREF;
use crate::render;

const GLOBAL_CSS: &str = include_str!("../static/globals.css");

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route(STYLESHEET_HREF, get(stylesheet))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(render::render_page().await)
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], GLOBAL_CSS)
}

/// Binds `hostname:port` and serves until Ctrl-C or SIGTERM.
pub async fn serve(hostname: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((hostname, port))
        .await
        .with_context(|| format!("failed to bind {hostname}:{port}"))?;
    let addr = listener.local_addr().context("listener has no local address")?;
    info!(%addr, "serving page");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

//! HTTP adapter: query parameters in, PNG (or a JSON error) out.

pub(crate) mod response;

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Instant};

use anyhow::Context as _;
use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    assets::fonts::FontBook,
    config::WallpaperParams,
    foundation::error::GoalpaperError,
    progress::TodayPolicy,
    render::wallpaper::WallpaperRenderer,
};

/// Address used when none is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Startup configuration for [`serve`].
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Custom font file; `None` uses `$GOALPAPER_FONT` or the bundled default path.
    pub font_path: Option<PathBuf>,
    pub today: TodayPolicy,
}

impl ServerConfig {
    /// Load fonts (best-effort, blocking) and build the shared renderer.
    pub fn build_renderer(&self) -> WallpaperRenderer {
        let fonts = FontBook::load_default(self.font_path.as_deref());
        WallpaperRenderer::new(Arc::new(fonts), self.today)
    }
}

#[derive(Clone)]
struct AppState {
    renderer: Arc<WallpaperRenderer>,
}

/// Routes: `GET /` and `GET /api/goal` render a wallpaper, `GET /health` answers `ok`.
pub fn router(renderer: Arc<WallpaperRenderer>) -> Router {
    Router::new()
        .route("/", get(goal_wallpaper))
        .route("/api/goal", get(goal_wallpaper))
        .route("/health", get(health))
        .with_state(AppState { renderer })
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let renderer = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || config.build_renderer())
            .await
            .context("load fonts")?
    };

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, router(Arc::new(renderer)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn health() -> impl IntoResponse {
    "ok"
}

async fn goal_wallpaper(
    State(state): State<AppState>,
    query: Result<Query<WallpaperParams>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::error!(error = %e, "malformed query string");
            return response::render_failure(e.body_text());
        }
    };
    let started = Instant::now();
    let renderer = state.renderer.clone();
    let today = renderer.today();

    let result = tokio::task::spawn_blocking(move || {
        let config = params.resolve(today)?;
        renderer.render_at(&config, today)
    })
    .await
    .map_err(|e| GoalpaperError::Other(anyhow::Error::new(e).context("render task")))
    .and_then(|r| r);

    match result {
        Ok(png) => {
            tracing::info!(
                bytes = png.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "wallpaper rendered"
            );
            response::png_response(png, today)
        }
        Err(e) => {
            tracing::error!(error = %e, "error generating wallpaper");
            response::render_failure(e.to_string())
        }
    }
}

//! HTTP surface: `GET /models?refresh=<bool>` backed by the catalog cache.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Deserializer, de};
use serde_json::json;

use crate::core::models::{CatalogCache, CatalogError, ModelCatalog, ModelSource};

#[derive(Debug, Default, Deserialize)]
pub struct ModelsQuery {
    /// Bypass a fresh cache entry and rebuild from upstream.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub refresh: bool,
}

/// Query-string boolean: `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, `y/n`, any case.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"a boolean (true/false, 1/0, yes/no, on/off)",
        )),
    }
}

/// Upstream failure surfaced to HTTP callers as 502.
pub struct ApiError(CatalogError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "message": self.0.to_string(),
                "type": self.0.kind(),
            }
        });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

pub fn router<S>(cache: Arc<CatalogCache<S>>) -> Router
where
    S: ModelSource + 'static,
{
    Router::new()
        .route("/models", get(list_models::<S>))
        .with_state(cache)
}

async fn list_models<S>(
    State(cache): State<Arc<CatalogCache<S>>>,
    Query(query): Query<ModelsQuery>,
) -> Result<Json<Arc<ModelCatalog>>, ApiError>
where
    S: ModelSource + 'static,
{
    let catalog = cache.get_catalog(query.refresh).await.map_err(ApiError)?;
    Ok(Json(catalog))
}

/// Serve the router until Ctrl-C.
pub async fn serve<S>(
    addr: SocketAddr,
    cache: Arc<CatalogCache<S>>,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: ModelSource + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "Listening on http://{} (cache TTL {}s)",
        listener.local_addr()?,
        cache.ttl().as_secs()
    );
    axum::serve(listener, router(cache))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown requested");
}

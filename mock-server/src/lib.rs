//! Stub backend that answers under `/api`, the prefix every resolved base
//! URL ends with. Used as the live target in integration tests and as a
//! local stand-in on the development port.

use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Path prefix the backend is mounted under.
pub const API_PREFIX: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFound {
    pub detail: String,
}

pub fn app() -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/echo/{*path}", get(echo));
    Router::new().nest(API_PREFIX, api).fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("mock backend serving http://{addr}{API_PREFIX}");
    }
    axum::serve(listener, app()).await
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn echo(Path(path): Path<String>) -> Json<Echo> {
    Json(Echo {
        path: format!("/{}", path.trim_start_matches('/')),
    })
}

async fn not_found() -> (StatusCode, Json<NotFound>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFound {
            detail: "Not found.".to_string(),
        }),
    )
}

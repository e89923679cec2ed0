//! Fake analysis backend for tests

use crate::model::fixtures;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use futures::StreamExt;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Tickers requested so far, in arrival order
pub type Seen = Arc<Mutex<Vec<String>>>;

async fn analyze(State(seen): State<Seen>, Path(ticker): Path<String>) -> Response {
    seen.lock().unwrap().push(ticker.clone());
    match ticker.as_str() {
        "AAPL" => axum::Json(fixtures::full_report_json()).into_response(),
        "ZZZZ" => (
            StatusCode::NOT_FOUND,
            axum::Json(serde_json::json!({"detail": "Ticker not found"})),
        )
            .into_response(),
        "LIST" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(serde_json::json!({"detail": [{"msg": "bad"}]})),
        )
            .into_response(),
        "HTML" => (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response(),
        "JUNK" => (StatusCode::OK, "not json").into_response(),
        "CUT" => {
            // Headers and a first chunk go out, then the connection drops
            let chunks = futures::stream::iter([
                Ok(Bytes::from_static(br#"{"ticker":"CUT","#)),
                Err(io::Error::other("backend crashed mid-response")),
            ])
            .then(|chunk| async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                chunk
            });
            (StatusCode::OK, Body::from_stream(chunks)).into_response()
        }
        "SLOW" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            axum::Json(fixtures::full_report_json()).into_response()
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "").into_response(),
    }
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({"status": "ok"}))
}

/// Serve the fake backend on an ephemeral port and return its base URL
pub async fn spawn_backend(seen: Seen) -> String {
    let app = Router::new()
        .route("/analyze/:ticker", get(analyze))
        .route("/health", get(health))
        .with_state(seen);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

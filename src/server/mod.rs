//! HTTP boundary: `GET /api/extract?url=...` behind a permissive CORS layer.

use std::any::Any;
use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use clap::Args;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tracing::Instrument;

use crate::error::AppError;
use crate::fetch::{self, FetchConfig, FetchError, PageFetcher};
use crate::lookup::service;
use crate::telemetry::{self};
use crate::telemetry::ops::serve::Phase as ServePhase;

pub mod config;
pub mod types;

pub use config::ServeConfig;
use types::{ErrorBody, ExtractParams, SuccessBody};

/// vidscout serve
#[derive(Args, Debug)]
pub struct ServeCmd {
    /// Listen address, e.g. 0.0.0.0:8080
    #[arg(long)] pub bind: Option<String>,
    #[arg(long)] pub timeout_ms: Option<u64>,
    #[arg(long)] pub relay: Option<String>,
    #[arg(long, default_value_t = false)] pub debug_snippet: bool,
    #[arg(long, default_value_t = false)] pub expose_errors: bool,
}

pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub cfg: ServeConfig,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(cors::Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/extract", get(extract).options(preflight))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(state)
}

/// Panics anywhere in the handler path still answer with the generic 500 body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err.downcast_ref::<String>().map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new("Server error"))).into_response()
}

pub async fn run(args: ServeCmd) -> Result<()> {
    let log = telemetry::serve();
    let root = log.root_span_kv([
        ("bind", format!("{:?}", args.bind)),
        ("relay", args.relay.is_some().to_string()),
    ]);

    let cfg = ServeConfig::from_env()?.with_overrides(args.bind.as_deref(), args.debug_snippet, args.expose_errors)?;
    let fetch_cfg = FetchConfig::from_env().with_overrides(args.timeout_ms, args.relay);
    let state = Arc::new(AppState { fetcher: fetch::build(&fetch_cfg)?, cfg: cfg.clone() });

    let listener = {
        let _s = log.span(&ServePhase::Bind).entered();
        tokio::net::TcpListener::bind(cfg.bind).await.with_context(|| format!("bind {}", cfg.bind))?
    };
    log.info(format!("🚀 listening on http://{}", cfg.bind));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .into_future()
        .instrument(root)
        .await
        .context("http server")?;

    let _s = log.span(&ServePhase::Shutdown).entered();
    log.info("👋 server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn extract(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ExtractParams>, QueryRejection>,
) -> Response {
    let log = telemetry::lookup();
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            log.warn_kv("request failed", [("kind", "invalid_input".to_string()), ("error", rejection.body_text())]);
            return error_response(AppError::InvalidInput("Invalid URL"), &state.cfg);
        }
    };
    let span = log.root_span_kv([("url", format!("{:?}", params.url))]);

    let outcome = service::execute(state.fetcher.as_ref(), params.url.as_deref(), &log)
        .instrument(span)
        .await;

    match outcome {
        Ok(candidates) => (StatusCode::OK, Json(SuccessBody::new(&candidates))).into_response(),
        Err(err) => {
            log.warn_kv("request failed", [("kind", err.kind().to_string()), ("error", err.to_string())]);
            error_response(err, &state.cfg)
        }
    }
}

/// Map the error taxonomy onto status codes and the public JSON shape.
pub fn error_response(err: AppError, cfg: &ServeConfig) -> Response {
    let (status, body) = match err {
        AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
        AppError::UpstreamUnavailable(e) => {
            let status = match e {
                FetchError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                FetchError::UpstreamStatus(_) | FetchError::Network(_) => StatusCode::BAD_GATEWAY,
            };
            (status, ErrorBody::new(e.to_string()))
        }
        AppError::NoCandidatesFound { snippet } => {
            let mut body = ErrorBody::new(crate::error::NOT_FOUND_MESSAGE);
            if cfg.debug_snippet { body.debug_snippet = Some(snippet); }
            (StatusCode::NOT_FOUND, body)
        }
        AppError::Internal(e) => {
            let mut body = ErrorBody::new("Server error");
            if cfg.expose_errors { body.error = Some(format!("{e:#}")); }
            (StatusCode::INTERNAL_SERVER_ERROR, body)
        }
    };
    (status, Json(body)).into_response()
}

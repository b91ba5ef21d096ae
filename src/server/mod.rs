//! HTTP surface: router, shared state, panic handling.

pub mod handler;
pub mod log;
pub mod response;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::PipelineError;

pub use handler::process_pipeline;
pub use log::{PipelineLog, TracingLog};
pub use response::{AnalysisDetails, ErrorBody, HealthResponse, PipelineResponse, ResponseDetails};

#[derive(Clone)]
pub struct AppState {
    pub log: Arc<dyn PipelineLog>,
}

impl AppState {
    pub fn new(log: Arc<dyn PipelineLog>) -> Self {
        AppState { log }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Arc::new(TracingLog))
    }
}

/// Build the service router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    // TraceLayer logs all HTTP requests with method, path, status, and latency
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let panic_log = state.log.clone();
    let catch_panic = CatchPanicLayer::custom(move |payload: Box<dyn Any + Send + 'static>| {
        internal_failure(panic_log.as_ref(), payload)
    });

    Router::new()
        .route("/", get(handler::health))
        .route("/pipelines/parse", post(handler::parse_pipeline))
        .layer(catch_panic)
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}

fn internal_failure(log: &dyn PipelineLog, payload: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    let error = PipelineError::InternalFailure(cause);
    log.rejected(&error);
    error.into_response()
}

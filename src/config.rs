//! Service configuration from command-line flags and environment.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Parser, Debug, Clone)]
#[command(name = "pipeline-analyzer", version, about = "Validates and analyzes pipeline graphs over HTTP")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "PIPELINE_ANALYZER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "PIPELINE_ANALYZER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Front-end origin allowed to call the API (repeatable, or comma-separated)
    #[arg(
        long = "allowed-origin",
        env = "PIPELINE_ANALYZER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,

    /// Log filter directive, e.g. `info` or `pipeline_analyzer=debug,tower_http=info`
    #[arg(long, env = "PIPELINE_ANALYZER_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS policy: listed origins only, credentials allowed, any method and
    /// header mirrored back from the preflight.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .with_context(|| format!("Invalid allowed origin '{}'", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

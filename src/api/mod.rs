mod error;
mod params;
mod wire;

use axum::{
    Router,
    extract::Query,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::core::{
    DEFAULT_HIGH_PERCENTILE, DEFAULT_LOW_PERCENTILE, Report, ReportOptions, render_report,
};

pub use error::{PayloadError, PayloadResult};
pub use params::{AssetWeight, SimulationMethod, SimulationParams};
pub use wire::{CamelCasePayload, RenderRequest, SnakeCasePayload, WirePayload, WireStats};

#[derive(Parser, Debug)]
#[command(
    name = "fanchart",
    about = "Percentile bands, axis ticks and summary tables for Monte Carlo portfolio paths"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the render API over HTTP
    Serve {
        #[arg(default_value_t = 8080)]
        port: u16,
    },
    /// Render a simulation payload from a file or stdin to JSON on stdout
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[arg(
        long,
        default_value = "-",
        help = "Simulation payload JSON file, or - for stdin"
    )]
    pub input: PathBuf,
    #[arg(
        long,
        default_value_t = DEFAULT_LOW_PERCENTILE,
        help = "Lower band percentile, between 0 and 50"
    )]
    pub low_percentile: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_HIGH_PERCENTILE,
        help = "Upper band percentile, between 50 and 100"
    )]
    pub high_percentile: f64,
    #[arg(long, help = "Pretty-print the report")]
    pub pretty: bool,
}

impl RenderArgs {
    fn options(&self) -> ReportOptions {
        ReportOptions {
            low_percentile: self.low_percentile,
            high_percentile: self.high_percentile,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RenderQuery {
    low_percentile: Option<f64>,
    high_percentile: Option<f64>,
}

impl RenderQuery {
    fn options(&self) -> ReportOptions {
        let mut options = ReportOptions::default();
        if let Some(v) = self.low_percentile {
            options.low_percentile = v;
        }
        if let Some(v) = self.high_percentile {
            options.high_percentile = v;
        }
        options
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Parses a render request (bare payload or `{result, params}` envelope) and
/// builds its report.
pub fn render_json(json: &str, options: ReportOptions) -> PayloadResult<Report> {
    options.validate().map_err(PayloadError::InvalidOptions)?;
    let request = RenderRequest::from_json(json)?;
    Ok(render_report(&request.outcome, options))
}

pub fn run_render(args: &RenderArgs) -> PayloadResult<String> {
    let json = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.input)?
    };

    let report = render_json(&json, args.options())?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(output)
}

pub fn router() -> Router {
    Router::new()
        .route("/api/render", post(render_handler))
        .route("/api/health", get(health_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    log::info!("fanchart HTTP API listening on http://{addr}");
    log::info!("Local access: http://127.0.0.1:{port}/api/health");

    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn render_handler(Query(query): Query<RenderQuery>, body: String) -> Response {
    render_handler_impl(&query, &body)
}

fn render_handler_impl(query: &RenderQuery, body: &str) -> Response {
    match render_json(body, query.options()) {
        Ok(report) => json_response(StatusCode::OK, report),
        Err(e) => {
            log::warn!("rejected render request: {e}");
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, axum::Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

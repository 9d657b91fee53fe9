use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use usermgmt_config::{LogConfig, LogFormat};

/// Innermost stage of the request chain. Only requests that got past the auth
/// gate reach it, so every request it sees is one the handler will run.
///
/// Both events sit inside a `request` span carrying the request id and the
/// matched route; the first names the method and path, the second the status
/// and latency, levelled by status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %uuid::Uuid::new_v4(),
        route = route.as_deref().unwrap_or(&path),
    );

    async move {
        info!(method = %method, path = %path, "Handling request");

        let start = Instant::now();
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        match status {
            500..=599 => error!(status, latency_ms, "Handler responded"),
            400..=499 => warn!(status, latency_ms, "Handler responded"),
            _ => info!(status, latency_ms, "Handler responded"),
        }

        response
    }
    .instrument(span)
    .await
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http=warn,hyper=warn",
            env!("CARGO_CRATE_NAME"),
            config.level
        ))
    })
}

/// Installs the global subscriber. `RUST_LOG` wins over `LOG_LEVEL`.
pub fn init_logging(config: &LogConfig) {
    let layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter(config))
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter(config))
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).init();
}

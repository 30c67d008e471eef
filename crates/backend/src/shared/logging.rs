use super::format::format_size;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console + file logging. Level comes from `RUST_LOG`, default `info`.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Простой middleware для логирования запросов
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the body to log its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} body error: {}",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        status = parts.status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        size = %format_size(bytes.len()),
        "{} {}",
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}

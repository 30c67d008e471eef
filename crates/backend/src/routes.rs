use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::logging::request_logger;

/// Конфигурация всех роутов приложения
///
/// Only `/health` is dynamic; everything else is the frontend bundle.
/// Unknown paths get `index.html` so reloads keep working.
pub fn configure_routes(static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::net::TcpListener;

    /// Removed when the returned guard drops
    fn make_static_dir() -> TempDir {
        let dir = TempDir::new().expect("tmpdir");
        std::fs::write(dir.path().join("index.html"), "<html>meal planner</html>").unwrap();
        std::fs::write(dir.path().join("styles.css"), ".tab-panel{}").unwrap();
        dir
    }

    async fn spawn(static_dir: &Path) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = configure_routes(static_dir);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health() {
        let dir = make_static_dir();
        let base = spawn(dir.path()).await;

        let resp = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dir = make_static_dir();
        let base = spawn(dir.path()).await;

        let resp = reqwest::get(format!("{}/styles.css", base)).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), ".tab-panel{}");

        let resp = reqwest::get(format!("{}/", base)).await.unwrap();
        assert!(resp.text().await.unwrap().contains("meal planner"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = make_static_dir();
        let base = spawn(dir.path()).await;

        let resp = reqwest::get(format!("{}/plan/desserts", base)).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert!(resp.text().await.unwrap().contains("meal planner"));
    }
}

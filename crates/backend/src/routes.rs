use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::request_logger::request_logger;

/// Роуты статического хоста
///
/// `/health` для проверки живости, всё остальное отдаётся из `dist_dir`.
/// Неизвестные пути получают `index.html`, дальше секцию выбирает фронтенд.
pub fn configure_routes(dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><title>SnapMoments</title>";

    fn dist_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("snapmoments-dist-{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("styles.css"), "body { margin: 0; }").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = configure_routes(&dist_fixture("health"));
        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let app = configure_routes(&dist_fixture("static"));
        let (status, body) = get_body(app, "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let app = configure_routes(&dist_fixture("fallback"));
        let (status, body) = get_body(app, "/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }
}

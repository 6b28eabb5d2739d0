use super::format::format_size;
use axum::body::{to_bytes, Body};
use axum::http::response::Parts;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Простой middleware для логирования запросов
///
/// `HH:MM:SS | duration | size | status method path`, время голубым для 200
/// и коричневым для остальных статусов.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let (size_label, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (format_size(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", path, e);
            ("error".to_string(), empty_body(&mut parts))
        }
    };

    let color_code = if parts.status.as_u16() == 200 { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size_label,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}

/// Пустое тело вместо непрочитанного; старый Content-Length больше не верен
fn empty_body(parts: &mut Parts) -> Body {
    parts.headers.remove(header::CONTENT_LENGTH);
    Body::empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_drops_content_length() {
        let response = Response::builder()
            .header(header::CONTENT_LENGTH, "42")
            .header(header::CONTENT_TYPE, "text/html")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = response.into_parts();

        let _body = empty_body(&mut parts);
        assert!(parts.headers.get(header::CONTENT_LENGTH).is_none());
        assert_eq!(parts.headers.get(header::CONTENT_TYPE).unwrap(), "text/html");
    }
}

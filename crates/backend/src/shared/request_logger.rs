use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Форматирует число с разделителями триад (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_size(1234567), "1.234.567");
/// assert_eq!(format_size(42), "42");
/// ```
pub fn format_size(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Голубой для 2xx, коричневый для остального
fn status_color(status: u16) -> &'static str {
    if (200..300).contains(&status) {
        "36"
    } else {
        "33"
    }
}

/// One coloured line per request: time | duration | body size | status method path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    // Тело читаем целиком, чтобы узнать реальный размер ответа
    let (bytes, size_label) = match to_bytes(body, usize::MAX).await {
        Ok(b) => {
            let label = format_size(b.len());
            (b, label)
        }
        Err(e) => {
            tracing::warn!("failed to buffer response body for {}: {}", path, e);
            (Default::default(), "error".to_string())
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size_label,
        status,
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(42), "42");
        assert_eq!(format_size(999), "999");
        assert_eq!(format_size(1000), "1.000");
        assert_eq!(format_size(123456), "123.456");
        assert_eq!(format_size(1234567), "1.234.567");
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(200), "36");
        assert_eq!(status_color(204), "36");
        assert_eq!(status_color(404), "33");
        assert_eq!(status_color(500), "33");
    }
}

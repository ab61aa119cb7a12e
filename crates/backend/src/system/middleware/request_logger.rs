use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::dashboards::d404_fiscal_outlook::format::format_thousands;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог: статус, метод, путь, длительность и размер ответа
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} {} | {}ms | body error: {}",
                parts.status.as_u16(),
                method,
                path,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = format_thousands(bytes.len() as u64);
    let duration = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!("{} {} {} | {}ms | {} B", parts.status.as_u16(), method, path, duration, size);
    } else {
        tracing::warn!("{} {} {} | {}ms | {} B", parts.status.as_u16(), method, path, duration, size);
    }

    Response::from_parts(parts, Body::from(bytes))
}

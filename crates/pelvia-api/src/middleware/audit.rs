use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Audit logging middleware.
///
/// Emits one structured `api_request` event per request with the matched
/// route template and, for instrument routes, the instrument id. Request
/// bodies carry clinical data and are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string());
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        route = route.as_deref().unwrap_or("unmatched"),
        instrument = instrument_id(&path),
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}

/// Instrument id from an `/instruments/{id}[/...]` path.
fn instrument_id(path: &str) -> Option<&str> {
    path.strip_prefix("/instruments/")
        .and_then(|rest| rest.split('/').next())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instrument_id_is_taken_from_instrument_routes() {
        assert_eq!(instrument_id("/instruments/iciq-sf"), Some("iciq-sf"));
        assert_eq!(instrument_id("/instruments/udi-6/score"), Some("udi-6"));
        assert_eq!(instrument_id("/instruments"), None);
        assert_eq!(instrument_id("/instruments/"), None);
        assert_eq!(instrument_id("/analysis"), None);
    }
}

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::{Error, Result};

pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}

/// Restricts to the listed web-client origins; an empty list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(permissive_cors());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::Config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_listed_origins() {
        let origins = vec!["http://localhost:5173".to_string()];
        assert!(cors_layer(&origins).is_ok());
        assert!(cors_layer(&[]).is_ok());
    }

    #[test]
    fn rejects_unrepresentable_origin() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(matches!(cors_layer(&origins), Err(Error::Config(_))));
    }
}

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::WebError;

/// Rejects requests that do not carry a known `Authorization: Bearer <key>`.
pub async fn require_auth(State(api_keys): State<ApiKeys>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if api_keys.is_valid(token) => next.run(request).await,
        Some(_) => {
            tracing::warn!("Invalid API key attempt");
            WebError::Unauthorized.into_response()
        }
        None => WebError::Unauthorized.into_response(),
    }
}

#[derive(Clone)]
pub struct ApiKeys {
    keys: Arc<HashSet<String>>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{self, StatusCode},
        middleware,
        routing::post,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/protected", post(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(
                ApiKeys::from_comma_separated("alpha, beta"),
                require_auth,
            ))
    }

    async fn status_for(auth: Option<&str>) -> StatusCode {
        let mut builder = http::Request::builder().method("POST").uri("/protected");
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_parses_comma_separated_keys() {
        let keys = ApiKeys::from_comma_separated(" alpha,, beta ,");
        assert!(!keys.is_empty());
        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(!keys.is_valid(""));
        assert!(ApiKeys::from_comma_separated(" , ").is_empty());
    }

    #[tokio::test]
    async fn test_accepts_known_key() {
        assert_eq!(status_for(Some("Bearer beta")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_unknown_or_missing_key() {
        assert_eq!(status_for(Some("Bearer gamma")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("beta")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }
}

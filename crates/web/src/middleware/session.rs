use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::WebError;

/// Header carrying the authenticated account id, set by the auth proxy.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the account making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(WebError::Unauthorized)?;

        Ok(Self {
            user_id: user_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<SessionContext, WebError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        SessionContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_reads_user_id_header() {
        let session = extract(Some(" user-42 ")).await.unwrap();
        assert_eq!(session.user_id, "user-42");
    }

    #[tokio::test]
    async fn test_missing_or_blank_header_is_unauthorized() {
        assert!(matches!(extract(None).await, Err(WebError::Unauthorized)));
        assert!(matches!(extract(Some("  ")).await, Err(WebError::Unauthorized)));
    }
}

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// The authorization checkpoint: extracts and verifies the bearer token and
/// yields the authenticated user id. The token's claim is trusted without
/// re-reading the users table; handlers below only re-check ownership.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Auth("Not authorized, no token".to_string()))?;

        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token verification failed");
            ApiError::Auth("Not authorized, invalid token".to_string())
        })?;

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{DecodingKey, EncodingKey};
    use std::time::Duration;

    fn make_keys() -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(b"test-secret"),
            decoding: DecodingKey::from_secret(b"test-secret"),
            ttl: Duration::from_secs(3600),
        }
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/journal");
        if let Some(v) = value {
            builder = builder.header(axum::http::header::AUTHORIZATION, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn missing_header_is_rejected_with_no_token_message() {
        let keys = make_keys();
        let mut parts = parts_with_auth(None);
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        match err {
            ApiError::Auth(msg) => assert_eq!(msg, "Not authorized, no token"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected_with_no_token_message() {
        let keys = make_keys();
        let mut parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        match err {
            ApiError::Auth(msg) => assert_eq!(msg, "Not authorized, no token"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_with_invalid_token_message() {
        let keys = make_keys();
        let mut parts = parts_with_auth(Some("Bearer not.a.jwt"));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        match err {
            ApiError::Auth(msg) => assert_eq!(msg, "Not authorized, invalid token"),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn valid_token_yields_the_user_id() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id).expect("sign");
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let AuthUser(id) = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .expect("extract");
        assert_eq!(id, user_id);
    }
}

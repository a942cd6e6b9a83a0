use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::Identity;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Extension type carrying the identity resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

/// Middleware that validates bearer tokens and adds the identity to request extensions.
///
/// Every rejection produces the same 401 body, whatever the cause.
pub async fn authenticate<US: UserServicePort>(
    State(state): State<AppState<US>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)
        .ok_or_else(unauthorized)?
        .to_owned();

    let identity = state
        .user_service
        .resolve_identity(&token)
        .await
        .map_err(|_| unauthorized())?;

    req.extensions_mut().insert(AuthenticatedUser(identity));

    Ok(next.run(req).await)
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Unauthorized".to_string())
}

fn extract_token_from_header(req: &Request) -> Option<&str> {
    let auth_header = req.headers().get(http::header::AUTHORIZATION);
    let Some(auth_str) = auth_header.and_then(|value| value.to_str().ok()) else {
        tracing::debug!("Missing or unreadable Authorization header");
        return None;
    };

    // Auth schemes are case-insensitive.
    match auth_str.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
        {
            Some(token.trim())
        }
        _ => {
            tracing::debug!("Authorization header is not a bearer token");
            None
        }
    }
}

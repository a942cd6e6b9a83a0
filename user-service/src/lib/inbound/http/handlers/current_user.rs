use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Return the identity carried by the caller's bearer token.
pub async fn current_user(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<CurrentUserResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub id: String,
    pub email: String,
    pub username: String,
}

impl From<AuthenticatedUser> for CurrentUserResponseData {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.0.subject_id.to_string(),
            email: user.0.email.as_str().to_string(),
            username: user.0.username.as_str().to_string(),
        }
    }
}

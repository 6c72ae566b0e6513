use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorBody;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("No bearer token was provided")]
    MissingAuthHeader,
    #[error("Bearer token failed validation: {0}")]
    InvalidToken(String),
    #[error("Bearer token has been revoked")]
    TokenRevoked,
    #[error("User ID {0} from a valid token no longer exists")]
    UserNotFound(i64),
    #[error("Admin role is required for this operation")]
    Forbidden,
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (StatusCode::UNAUTHORIZED, Json(ErrorBody::message(message))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => Self::unauthorized("Invalid credentials."),
            Self::MissingAuthHeader => Self::unauthorized("Authentication required."),
            Self::InvalidToken(_) | Self::TokenRevoked => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid token.")
            }
            Self::UserNotFound(user_id) => {
                tracing::warn!(user_id = %user_id, "{}", self);

                Self::unauthorized("Invalid token.")
            }
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(ErrorBody::message("Admin access required.")),
            )
                .into_response(),
        }
    }
}

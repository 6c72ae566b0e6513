use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::Error,
    model::{
        api::{ErrorBody, MessageDto},
        app::AppState,
        auth::{AuthUser, AuthUserDto, LoginDto, TokenResponseDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 422, description = "Malformed payload", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    dto.validate()?;

    let response = AuthService::new(&state.db, &state.config).login(dto).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Revoke the presented bearer token
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token revoked", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn logout(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db, &state.config)
        .logout(&auth.token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully.".to_string(),
        }),
    ))
}

/// The authenticated caller's own profile
#[utoipa::path(
    get,
    path = "/api/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = AuthUserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn me(auth: AuthUser) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(AuthUserDto::from(auth.user))))
}

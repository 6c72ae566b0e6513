use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use entity::app_user::UserRole;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::{auth::AuthError, Error},
    model::app::AppState,
    service::auth::AuthService,
};

/// JWT claim set minted at login and checked on every protected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: i64,
    pub username: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct LoginDto {
    #[validate(length(min = 1, max = 15))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthUserDto {
    pub id: i64,
    pub username: String,
    #[schema(value_type = String, example = "Admin")]
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

impl From<entity::app_user::Model> for AuthUserDto {
    fn from(model: entity::app_user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            role: model.role,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenResponseDto {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUserDto,
}

/// Verified caller identity, attached by the extractor before a protected
/// handler runs. The raw token is kept so logout can revoke it by hash.
#[derive(Debug)]
pub struct AuthUser {
    pub user: entity::app_user::Model,
    pub claims: Claims,
    pub token: String,
}

/// [`AuthUser`] narrowed to the Admin role; rejects with 403 otherwise.
pub struct AdminUser(pub AuthUser);

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = bearer_token(parts).ok_or(AuthError::MissingAuthHeader)?;

        AuthService::new(&state.db, &state.config)
            .authenticate(&token)
            .await
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        if auth.user.role != UserRole::Admin {
            return Err(AuthError::Forbidden.into());
        }

        Ok(AdminUser(auth))
    }
}

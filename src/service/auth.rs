use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    config::Config,
    data::{app_user::AppUserRepository, revoked_token::RevokedTokenRepository},
    error::{auth::AuthError, Error},
    model::auth::{AuthUser, Claims, LoginDto, TokenResponseDto},
};

/// Credential verification, token issuance, and revocation-by-hash.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Verifies the credentials and mints an HS256 bearer token.
    pub async fn login(&self, dto: LoginDto) -> Result<TokenResponseDto, Error> {
        let user = AppUserRepository::new(self.db)
            .find_by_username(dto.username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(&dto.password, &user.password)?;

        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::seconds(self.config.jwt_ttl_seconds);

        let claims = Claims {
            iss: self.config.app_url.clone(),
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        Ok(TokenResponseDto {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.jwt_ttl_seconds,
            user: user.into(),
        })
    }

    /// Revokes the presented token by storing its hash until the token
    /// would have expired anyway.
    pub async fn logout(&self, token: &str) -> Result<(), Error> {
        let claims = self.decode(token)?;

        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_else(|| Utc::now().naive_utc());

        RevokedTokenRepository::new(self.db)
            .revoke(&token_hash(token), expires_at)
            .await?;

        Ok(())
    }

    /// Validates a bearer token end to end: signature and expiry, the
    /// revocation list, and that the subject still exists.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, Error> {
        let claims = self.decode(token)?;

        if RevokedTokenRepository::new(self.db)
            .is_revoked(&token_hash(token))
            .await?
        {
            return Err(AuthError::TokenRevoked.into());
        }

        let user = AppUserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound(claims.sub))?;

        Ok(AuthUser {
            user,
            claims,
            token: token.to_string(),
        })
    }

    fn decode(&self, token: &str) -> Result<Claims, Error> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|err| AuthError::InvalidToken(err.to_string()).into())
    }
}

/// SHA-256 hex digest used as the revocation key; the raw token is never
/// persisted.
pub fn token_hash(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

fn verify_password(password: &str, hash: &str) -> Result<(), Error> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)?;

    Ok(())
}

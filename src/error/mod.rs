//! Error types for the stipend server.
//!
//! One thiserror enum per domain (auth, configuration, payroll business
//! rules) plus a unified [`Error`] that wraps them and the external library
//! errors. Every error implements `IntoResponse`; business-rule rejections
//! render the `{message, errors, ...}` body that API consumers rely on,
//! everything unexpected collapses into a logged 500.

pub mod auth;
pub mod config;
pub mod payroll;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, payroll::PayrollError},
    model::api::ErrorBody,
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, token validation, role gate).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Business-rule rejection for directory/catalog/assignment operations.
    #[error(transparent)]
    PayrollError(#[from] PayrollError),
    /// Malformed request payload, reported per field.
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    /// Internal invariant violation indicating a bug.
    #[error("Internal invariant violated: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token encoding/decoding failure outside the validation path.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PayrollError(err) => err.into_response(),
            Self::ValidationError(err) => validation_response(&err),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Renders a 422 with one reason per offending field, so callers can correct
/// input without guessing.
fn validation_response(errors: &validator::ValidationErrors) -> Response {
    let mut fields = BTreeMap::new();

    for (field, field_errors) in errors.field_errors() {
        let reason = field_errors
            .first()
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => e.code.to_string(),
            })
            .unwrap_or_else(|| "invalid value".to_string());

        fields.insert(field.to_string(), reason);
    }

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody::with_fields("The given data was invalid.", fields)),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::message("Internal server error.")),
        )
            .into_response()
    }
}

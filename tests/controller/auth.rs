//! Handler-level tests for the auth endpoints, calling the controller
//! functions directly with extractor values.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::app_user::UserRole;
use stipend::{controller::auth::login, model::auth::LoginDto, service::auth::AuthService};
use stipend_test_utils::prelude::*;

use crate::setup::test_setup;

fn login_dto(username: &str, password: &str) -> LoginDto {
    LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Valid credentials return 200 with a token payload
#[tokio::test]
async fn login_success() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_auth_tables().await?;
    test.insert_user(factory::app_user(1, "admin", "hunter2", UserRole::Admin)?)
        .await?;

    let result = login(State(state), Json(login_dto("admin", "hunter2"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Wrong credentials return 401
#[tokio::test]
async fn login_invalid_credentials() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_auth_tables().await?;
    test.insert_user(factory::app_user(1, "admin", "hunter2", UserRole::Admin)?)
        .await?;

    let result = login(State(state), Json(login_dto("admin", "wrong"))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// An empty payload is rejected with per-field reasons
#[tokio::test]
async fn login_validation_failure() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_auth_tables().await?;

    let result = login(State(state), Json(login_dto("", ""))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// A token stops authenticating once revoked through the service
#[tokio::test]
async fn revoked_token_is_rejected() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_auth_tables().await?;
    test.insert_user(factory::app_user(1, "admin", "hunter2", UserRole::Admin)?)
        .await?;

    let service = AuthService::new(&state.db, &state.config);
    let response = service.login(login_dto("admin", "hunter2")).await.unwrap();

    assert!(service.authenticate(&response.token).await.is_ok());

    service.logout(&response.token).await.unwrap();

    let result = service.authenticate(&response.token).await;
    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

//! Handler-level tests for the admin payroll endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use stipend::{
    controller::payroll::{clear, list, remove_component, show, store, update},
    model::payroll::{PayrollListQuery, StoreAssignmentDto, UpdateAssignmentDto},
};
use stipend_test_utils::prelude::*;

use crate::setup::{admin_user, test_setup};

async fn seed(test: &TestSetup) -> Result<(), TestError> {
    test.with_payroll_tables().await?;

    test.insert_member(factory::member(1)).await?;
    test.insert_component(factory::component(10, "Gaji Pokok", Decimal::new(4_200_000_00, 2)))
        .await?;

    Ok(())
}

/// Assigning components returns 201 with the refreshed detail payload
#[tokio::test]
async fn store_returns_created_with_detail() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    seed(&test).await?;

    let dto = StoreAssignmentDto {
        member_id: 1,
        component_ids: vec![10],
    };

    let result = store(admin_user(), State(state), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["member"]["id"], 1);
    assert_eq!(body["summary"]["component_count"], 1);
    assert_eq!(body["summary"]["total_monthly"], 4_200_000.0);

    Ok(())
}

/// Assigning to an unknown member returns 404
#[tokio::test]
async fn store_unknown_member_not_found() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    seed(&test).await?;

    let dto = StoreAssignmentDto {
        member_id: 99,
        component_ids: vec![10],
    };

    let result = store(admin_user(), State(state), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// An empty component list on create is a validation failure
#[tokio::test]
async fn store_empty_list_unprocessable() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    seed(&test).await?;

    let dto = StoreAssignmentDto {
        member_id: 1,
        component_ids: vec![],
    };

    let result = store(admin_user(), State(state), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Duplicate appends surface the duplicate ids in the error body
#[tokio::test]
async fn store_duplicate_lists_ids() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    seed(&test).await?;
    test.assign(1, 10).await?;

    let dto = StoreAssignmentDto {
        member_id: 1,
        component_ids: vec![10],
    };

    let result = store(admin_user(), State(state), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["duplicate_components"], serde_json::json!([10]));

    Ok(())
}

/// Replace returns 200; clearing returns 204; the relation delete 404s once
/// the row is gone
#[tokio::test]
async fn update_clear_and_remove_component_status_codes() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    seed(&test).await?;

    let resp = update(
        admin_user(),
        State(state.clone()),
        Path(1),
        Json(UpdateAssignmentDto {
            component_ids: vec![10],
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = remove_component(admin_user(), State(state.clone()), Path((1, 10)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = remove_component(admin_user(), State(state.clone()), Path((1, 10)))
        .await
        .unwrap_err()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = clear(admin_user(), State(state), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Summary list pages and reports pagination metadata
#[tokio::test]
async fn list_reports_pagination_meta() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_payroll_tables().await?;

    for id in 1..=15 {
        test.insert_member(factory::member(id)).await?;
    }

    let query = PayrollListQuery {
        page: Some(2),
        per_page: Some(10),
        search: None,
    };

    let resp = list(admin_user(), State(state), Query(query))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["meta"]["total"], 15);
    assert_eq!(body["meta"]["last_page"], 2);
    assert_eq!(body["meta"]["current_page"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    Ok(())
}

/// Detail for an unknown member returns 404
#[tokio::test]
async fn show_unknown_member_not_found() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_payroll_tables().await?;

    let result = show(admin_user(), State(state), Path(42)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

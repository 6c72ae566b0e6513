//! Handler-level tests for the unauthenticated public directory.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use stipend::{
    controller::public::{detail, list},
    model::payroll::PayrollListQuery,
};
use stipend_test_utils::prelude::*;

use crate::setup::test_setup;

/// The public list serves summary rows without any identity attached
#[tokio::test]
async fn public_list_success() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_payroll_tables().await?;

    test.insert_member(factory::member(1)).await?;
    test.insert_component(factory::component(10, "Gaji Pokok", Decimal::new(4_200_000_00, 2)))
        .await?;
    test.assign(1, 10).await?;

    let query = PayrollListQuery {
        page: None,
        per_page: None,
        search: None,
    };

    let resp = list(State(state), Query(query)).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // Public default page size is 20
    assert_eq!(body["meta"]["per_page"], 20);
    assert_eq!(body["data"][0]["take_home_pay"], 4_200_000.0);

    Ok(())
}

/// Unknown members 404 on the public detail route too
#[tokio::test]
async fn public_detail_not_found() -> Result<(), TestError> {
    let (test, state) = test_setup().await?;
    test.with_payroll_tables().await?;

    let result = detail(State(state), Path(123)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

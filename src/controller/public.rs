use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{payroll::PayrollError, Error},
    model::{
        api::{clamp_paging, ErrorBody, Page},
        app::AppState,
        payroll::{PayrollDetailDto, PayrollListQuery, PayrollSummaryDto},
    },
    service::payroll::PayrollAggregator,
};

pub static PUBLIC_TAG: &str = "public";

/// Public take-home-pay directory, no authentication required
#[utoipa::path(
    get,
    path = "/api/public/members",
    tag = PUBLIC_TAG,
    params(PayrollListQuery),
    responses(
        (status = 200, description = "Paged summary rows", body = Page<PayrollSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PayrollListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (page, per_page) = clamp_paging(query.page, query.per_page, 20, 200);

    let rows = PayrollAggregator::new(&state.db)
        .paged(query.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Public per-member payroll breakdown
#[utoipa::path(
    get,
    path = "/api/public/members/{id}/payroll",
    tag = PUBLIC_TAG,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Detail payload", body = PayrollDetailDto),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let detail = PayrollAggregator::new(&state.db)
        .detail(id)
        .await?
        .ok_or(PayrollError::MemberNotFound(id))?;

    Ok((StatusCode::OK, Json(detail)))
}

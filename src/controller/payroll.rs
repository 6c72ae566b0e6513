use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    error::{payroll::PayrollError, Error},
    model::{
        api::{clamp_paging, ErrorBody, Page},
        app::AppState,
        auth::AdminUser,
        payroll::{
            PayrollDetailDto, PayrollListQuery, PayrollSummaryDto, StoreAssignmentDto,
            UpdateAssignmentDto,
        },
    },
    service::{assignment::AssignmentService, payroll::PayrollAggregator},
};

pub static PAYROLL_TAG: &str = "payroll";

/// Paged take-home-pay summary over every member
#[utoipa::path(
    get,
    path = "/api/admin/payroll",
    tag = PAYROLL_TAG,
    params(PayrollListQuery),
    responses(
        (status = 200, description = "Paged summary rows", body = Page<PayrollSummaryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<PayrollListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (page, per_page) = clamp_paging(query.page, query.per_page, 10, 100);

    let rows = PayrollAggregator::new(&state.db)
        .paged(query.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Append components to a member's assignment set
#[utoipa::path(
    post,
    path = "/api/admin/payroll",
    tag = PAYROLL_TAG,
    request_body = StoreAssignmentDto,
    responses(
        (status = 201, description = "Components assigned; refreshed detail payload", body = PayrollDetailDto),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 422, description = "Missing components, position mismatch, or duplicates", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn store(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(dto): Json<StoreAssignmentDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    dto.validate()?;

    let detail = AssignmentService::new(&state.db)
        .append(dto.member_id, &dto.component_ids)
        .await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// A member's payroll detail payload
#[utoipa::path(
    get,
    path = "/api/admin/payroll/{id}",
    tag = PAYROLL_TAG,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Detail payload", body = PayrollDetailDto),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn show(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let detail = PayrollAggregator::new(&state.db)
        .detail(id)
        .await?
        .ok_or(PayrollError::MemberNotFound(id))?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Replace a member's full assignment set; an empty list clears it
#[utoipa::path(
    put,
    path = "/api/admin/payroll/{id}",
    tag = PAYROLL_TAG,
    params(("id" = i64, Path, description = "Member id")),
    request_body = UpdateAssignmentDto,
    responses(
        (status = 200, description = "Assignments replaced; refreshed detail payload", body = PayrollDetailDto),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 422, description = "Missing components or position mismatch", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateAssignmentDto>,
) -> Result<impl IntoResponse, Error> {
    dto.validate()?;

    let detail = AssignmentService::new(&state.db)
        .replace(id, &dto.component_ids)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Clear every assignment the member has
#[utoipa::path(
    delete,
    path = "/api/admin/payroll/{id}",
    tag = PAYROLL_TAG,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 204, description = "Assignments cleared"),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn clear(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    AssignmentService::new(&state.db).clear(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a single component assignment from a member
#[utoipa::path(
    delete,
    path = "/api/admin/payroll/{id}/components/{component_id}",
    tag = PAYROLL_TAG,
    params(
        ("id" = i64, Path, description = "Member id"),
        ("component_id" = i64, Path, description = "Component id")
    ),
    responses(
        (status = 200, description = "Assignment removed; refreshed detail payload", body = PayrollDetailDto),
        (status = 404, description = "Member or relation not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn remove_component(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path((id, component_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let detail = AssignmentService::new(&state.db)
        .remove_component(id, component_id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

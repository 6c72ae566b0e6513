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
        member::{MemberListQuery, MemberRowDto, StoreMemberDto, UpdateMemberDto},
    },
    service::member::MemberService,
};

pub static MEMBER_TAG: &str = "member";

/// Paged member directory with per-member assigned totals
#[utoipa::path(
    get,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    params(MemberListQuery),
    responses(
        (status = 200, description = "Paged member rows", body = Page<MemberRowDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<MemberListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (page, per_page) = clamp_paging(query.page, query.per_page, 10, 100);

    let rows = MemberService::new(&state.db)
        .list(query.search.as_deref(), query.position, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Create a member with a caller-supplied id
#[utoipa::path(
    post,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    request_body = StoreMemberDto,
    responses(
        (status = 201, description = "Member created", body = MemberRowDto),
        (status = 422, description = "Validation failed or id in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(dto): Json<StoreMemberDto>,
) -> Result<impl IntoResponse, Error> {
    dto.validate()?;

    let row = MemberService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// A single member with their assigned total
#[utoipa::path(
    get,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member row", body = MemberRowDto),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn show(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let row = MemberService::new(&state.db)
        .get(id)
        .await?
        .ok_or(PayrollError::MemberNotFound(id))?;

    Ok((StatusCode::OK, Json(row)))
}

/// Update a member's attributes in place
#[utoipa::path(
    put,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i64, Path, description = "Member id")),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberRowDto),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, Error> {
    dto.validate()?;

    let row = MemberService::new(&state.db).update(id, dto).await?;

    Ok((StatusCode::OK, Json(row)))
}

/// Delete a member and their assignment rows
#[utoipa::path(
    delete,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    MemberService::new(&state.db).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

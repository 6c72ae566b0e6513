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
        component::{ComponentDto, ComponentListQuery, StoreComponentDto, UpdateComponentDto},
    },
    service::component::ComponentService,
};

pub static COMPONENT_TAG: &str = "component";

/// Paged salary-component catalog
#[utoipa::path(
    get,
    path = "/api/admin/components",
    tag = COMPONENT_TAG,
    params(ComponentListQuery),
    responses(
        (status = 200, description = "Paged components", body = Page<ComponentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Admin role required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<ComponentListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (page, per_page) = clamp_paging(query.page, query.per_page, 10, 100);

    let rows = ComponentService::new(&state.db)
        .list(
            query.search.as_deref(),
            query.category,
            query.eligible_position,
            query.unit,
            page,
            per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Create a catalog component with a caller-supplied id
#[utoipa::path(
    post,
    path = "/api/admin/components",
    tag = COMPONENT_TAG,
    request_body = StoreComponentDto,
    responses(
        (status = 201, description = "Component created", body = ComponentDto),
        (status = 422, description = "Validation failed, id in use, or allowance role taken", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(dto): Json<StoreComponentDto>,
) -> Result<impl IntoResponse, Error> {
    dto.validate()?;

    let component = ComponentService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(component)))
}

/// A single catalog component
#[utoipa::path(
    get,
    path = "/api/admin/components/{id}",
    tag = COMPONENT_TAG,
    params(("id" = i64, Path, description = "Component id")),
    responses(
        (status = 200, description = "Component", body = ComponentDto),
        (status = 404, description = "Component not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn show(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let component = ComponentService::new(&state.db)
        .get(id)
        .await?
        .ok_or(PayrollError::ComponentNotFound(id))?;

    Ok((StatusCode::OK, Json(component)))
}

/// Partially update a catalog component; the id itself is immutable
#[utoipa::path(
    put,
    path = "/api/admin/components/{id}",
    tag = COMPONENT_TAG,
    params(("id" = i64, Path, description = "Component id")),
    request_body = UpdateComponentDto,
    responses(
        (status = 200, description = "Component updated", body = ComponentDto),
        (status = 404, description = "Component not found", body = ErrorBody),
        (status = 422, description = "Validation failed or allowance role taken", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateComponentDto>,
) -> Result<impl IntoResponse, Error> {
    dto.validate()?;

    let component = ComponentService::new(&state.db).update(id, dto).await?;

    Ok((StatusCode::OK, Json(component)))
}

/// Delete a component and any assignment rows referencing it
#[utoipa::path(
    delete,
    path = "/api/admin/components/{id}",
    tag = COMPONENT_TAG,
    params(("id" = i64, Path, description = "Component id")),
    responses(
        (status = 204, description = "Component deleted"),
        (status = 404, description = "Component not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
)]
pub async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    ComponentService::new(&state.db).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// Admin routes require a bearer token with the Admin role; the public
/// directory routes are unauthenticated. The OpenAPI document is available
/// at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Stipend", description = "Legislative payroll directory API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication routes"),
        (name = controller::member::MEMBER_TAG, description = "Member directory administration"),
        (name = controller::component::COMPONENT_TAG, description = "Salary component catalog administration"),
        (name = controller::payroll::PAYROLL_TAG, description = "Assignment and take-home-pay administration"),
        (name = controller::public::PUBLIC_TAG, description = "Public payroll directory"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::member::list, controller::member::create))
        .routes(routes!(
            controller::member::show,
            controller::member::update,
            controller::member::remove
        ))
        .routes(routes!(
            controller::component::list,
            controller::component::create
        ))
        .routes(routes!(
            controller::component::show,
            controller::component::update,
            controller::component::remove
        ))
        .routes(routes!(
            controller::payroll::list,
            controller::payroll::store
        ))
        .routes(routes!(
            controller::payroll::show,
            controller::payroll::update,
            controller::payroll::clear
        ))
        .routes(routes!(controller::payroll::remove_component))
        .routes(routes!(controller::public::list))
        .routes(routes!(controller::public::detail))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

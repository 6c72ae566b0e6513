use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorBody;

/// Business-rule rejections for the member directory, component catalog, and
/// assignment operations. Every variant is detected before any row is
/// written, so a rejected request never leaves partial state behind.
#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Member {0} was not found")]
    MemberNotFound(i64),
    #[error("Salary component {0} was not found")]
    ComponentNotFound(i64),
    #[error("Member {member_id} has no assignment for component {component_id}")]
    RelationNotFound { member_id: i64, component_id: i64 },
    #[error("Some salary components were not found: {0:?}")]
    MissingComponents(Vec<i64>),
    #[error("Salary component \"{component_name}\" cannot be assigned to position {position}")]
    PositionMismatch {
        component_name: String,
        position: &'static str,
    },
    #[error("Components already assigned to this member: {0:?}")]
    DuplicateAssignment(Vec<i64>),
    #[error("Member ID {0} is already in use")]
    DuplicateMemberId(i64),
    #[error("Salary component ID {0} is already in use")]
    DuplicateComponentId(i64),
    #[error("Allowance role \"{role}\" is already held by component {holder_id}")]
    AllowanceRoleTaken { role: &'static str, holder_id: i64 },
}

impl IntoResponse for PayrollError {
    fn into_response(self) -> Response {
        match self {
            Self::MemberNotFound(_) => {
                not_found("Member was not found.")
            }
            Self::ComponentNotFound(_) => {
                not_found("Salary component was not found.")
            }
            Self::RelationNotFound { .. } => {
                not_found("No such component assignment exists for this member.")
            }
            Self::MissingComponents(missing) => {
                let body = ErrorBody::with_field(
                    "Some salary components were not found.",
                    "component_ids",
                    "Some salary components were not found.",
                )
                .missing_components(missing);

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Self::PositionMismatch {
                ref component_name,
                position,
            } => {
                let body = ErrorBody::with_field(
                    format!(
                        "Salary component \"{component_name}\" cannot be assigned to position {position}."
                    ),
                    "component_ids",
                    "A selected component does not match the member's position.",
                );

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Self::DuplicateAssignment(duplicates) => {
                let body = ErrorBody::with_field(
                    "Some components are already assigned to this member.",
                    "component_ids",
                    "Some components are already assigned to this member.",
                )
                .duplicate_components(duplicates);

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Self::DuplicateMemberId(_) => {
                let body = ErrorBody::with_field(
                    "Member ID is already in use.",
                    "id",
                    "Member ID is already in use.",
                );

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Self::DuplicateComponentId(_) => {
                let body = ErrorBody::with_field(
                    "Salary component ID is already in use.",
                    "id",
                    "Salary component ID is already in use.",
                );

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Self::AllowanceRoleTaken { role, holder_id } => {
                let body = ErrorBody::with_field(
                    format!("Allowance role \"{role}\" is already held by component {holder_id}."),
                    "allowance_role",
                    "Another component already holds this allowance role.",
                );

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::message(message))).into_response()
}

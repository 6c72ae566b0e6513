use entity::member::{MaritalStatus, Position};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A member's plain attributes as embedded in payroll detail payloads.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemberDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title_prefix: Option<String>,
    pub title_suffix: Option<String>,
    #[schema(value_type = String, example = "Ketua")]
    pub position: Position,
    #[schema(value_type = String, example = "Kawin")]
    pub marital_status: MaritalStatus,
    pub child_count: i32,
}

impl From<entity::member::Model> for MemberDto {
    fn from(model: entity::member::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            title_prefix: model.title_prefix,
            title_suffix: model.title_suffix,
            position: model.position,
            marital_status: model.marital_status,
            child_count: model.child_count,
        }
    }
}

/// Admin directory row: member attributes plus the plain sum of every
/// assigned component amount regardless of unit.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemberRowDto {
    #[serde(flatten)]
    pub member: MemberDto,
    pub total_amount: f64,
}

#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct StoreMemberDto {
    #[validate(range(min = 1, message = "Member ID must be a positive integer."))]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(max = 50))]
    pub title_prefix: Option<String>,
    #[validate(length(max = 50))]
    pub title_suffix: Option<String>,
    #[schema(value_type = String, example = "Ketua")]
    pub position: Position,
    #[schema(value_type = String, example = "Kawin")]
    pub marital_status: MaritalStatus,
    #[validate(range(min = 0, message = "Child count cannot be negative."))]
    pub child_count: i32,
}

#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateMemberDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(max = 50))]
    pub title_prefix: Option<String>,
    #[validate(length(max = 50))]
    pub title_suffix: Option<String>,
    #[schema(value_type = String, example = "Ketua")]
    pub position: Position,
    #[schema(value_type = String, example = "Kawin")]
    pub marital_status: MaritalStatus,
    #[validate(range(min = 0, message = "Child count cannot be negative."))]
    pub child_count: i32,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct MemberListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    /// Exact position filter.
    #[param(value_type = Option<String>, example = "Ketua")]
    pub position: Option<Position>,
}

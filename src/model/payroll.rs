use entity::member::{MaritalStatus, Position};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{component::ComponentDto, member::MemberDto};

/// One row of the take-home-pay summary, covering every member including
/// those without any assigned components.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PayrollSummaryDto {
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
    pub total_monthly: f64,
    pub take_home_pay: f64,
    pub component_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PayrollTotalsDto {
    pub component_count: u64,
    pub total_monthly: f64,
    pub spouse_applied: f64,
    pub children_applied: f64,
    pub take_home_pay: f64,
}

/// Single-member payload: attributes, itemized assigned components, and the
/// computed totals.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PayrollDetailDto {
    pub member: MemberDto,
    pub components: Vec<ComponentDto>,
    pub summary: PayrollTotalsDto,
}

#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct StoreAssignmentDto {
    #[validate(range(min = 1, message = "Member ID must be a positive integer."))]
    pub member_id: i64,
    #[validate(length(min = 1, message = "Select at least one salary component."))]
    pub component_ids: Vec<i64>,
}

/// Replacement target set; an empty list clears the member's assignments.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateAssignmentDto {
    pub component_ids: Vec<i64>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct PayrollListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
}

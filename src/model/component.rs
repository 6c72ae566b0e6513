use entity::salary_component::{AllowanceRole, ComponentCategory, EligiblePosition, PayUnit};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ComponentDto {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "Gaji Pokok")]
    pub category: ComponentCategory,
    #[schema(value_type = String, example = "Semua")]
    pub eligible_position: EligiblePosition,
    pub amount: f64,
    #[schema(value_type = String, example = "Bulan")]
    pub unit: PayUnit,
    #[schema(value_type = String, example = "none")]
    pub allowance_role: AllowanceRole,
}

impl From<entity::salary_component::Model> for ComponentDto {
    fn from(model: entity::salary_component::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            eligible_position: model.eligible_position,
            amount: model.amount.to_f64().unwrap_or_default(),
            unit: model.unit,
            allowance_role: model.allowance_role,
        }
    }
}

#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct StoreComponentDto {
    #[validate(range(min = 1, max = 999_999_999_999_i64, message = "Component ID must be a positive integer."))]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[schema(value_type = String, example = "Gaji Pokok")]
    pub category: ComponentCategory,
    #[schema(value_type = String, example = "Semua")]
    pub eligible_position: EligiblePosition,
    #[validate(custom(function = validate_amount))]
    #[schema(value_type = f64, example = 5000000.00)]
    pub amount: Decimal,
    #[schema(value_type = String, example = "Bulan")]
    pub unit: PayUnit,
    #[serde(default = "default_allowance_role")]
    #[schema(value_type = String, example = "none")]
    pub allowance_role: AllowanceRole,
}

/// Partial update; absent fields keep their current value. The id is not
/// updatable.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateComponentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[schema(value_type = Option<String>, example = "Gaji Pokok")]
    pub category: Option<ComponentCategory>,
    #[schema(value_type = Option<String>, example = "Semua")]
    pub eligible_position: Option<EligiblePosition>,
    #[validate(custom(function = validate_amount))]
    #[schema(value_type = Option<f64>, example = 5000000.00)]
    pub amount: Option<Decimal>,
    #[schema(value_type = Option<String>, example = "Bulan")]
    pub unit: Option<PayUnit>,
    #[schema(value_type = Option<String>, example = "none")]
    pub allowance_role: Option<AllowanceRole>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ComponentListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    /// Exact category filter.
    #[param(value_type = Option<String>, example = "Gaji Pokok")]
    pub category: Option<ComponentCategory>,
    /// Exact eligible-position filter.
    #[param(value_type = Option<String>, example = "Semua")]
    pub eligible_position: Option<EligiblePosition>,
    /// Exact unit filter.
    #[param(value_type = Option<String>, example = "Bulan")]
    pub unit: Option<PayUnit>,
}

fn default_allowance_role() -> AllowanceRole {
    AllowanceRole::None
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        let mut error = ValidationError::new("amount");
        error.message = Some("Amount cannot be negative.".into());

        return Err(error);
    }

    Ok(())
}

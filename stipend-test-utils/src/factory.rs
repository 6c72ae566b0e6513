//! Factory functions for in-memory entity models with standard test values.
//!
//! Tests mutate the returned model before inserting it when they need
//! something other than the defaults.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use entity::{
    app_user::UserRole,
    member::{MaritalStatus, Position},
    salary_component::{AllowanceRole, ComponentCategory, EligiblePosition, PayUnit},
};
use rust_decimal::Decimal;

use crate::TestError;

/// An ordinary unmarried member with no children.
pub fn member(id: i64) -> entity::member::Model {
    entity::member::Model {
        id,
        first_name: "Budi".to_string(),
        last_name: "Santoso".to_string(),
        title_prefix: None,
        title_suffix: None,
        position: Position::Member,
        marital_status: MaritalStatus::Single,
        child_count: 0,
    }
}

/// A monthly base-salary component assignable to every position.
pub fn component(id: i64, name: &str, amount: Decimal) -> entity::salary_component::Model {
    entity::salary_component::Model {
        id,
        name: name.to_string(),
        category: ComponentCategory::BaseSalary,
        eligible_position: EligiblePosition::All,
        amount,
        unit: PayUnit::Monthly,
        allowance_role: AllowanceRole::None,
    }
}

/// The catalog component carrying the spouse-allowance role.
pub fn spouse_allowance(id: i64, amount: Decimal) -> entity::salary_component::Model {
    let mut model = component(id, "Tunjangan Istri/Suami", amount);
    model.category = ComponentCategory::AttachedAllowance;
    model.allowance_role = AllowanceRole::Spouse;
    model
}

/// The catalog component carrying the child-allowance role.
pub fn child_allowance(id: i64, amount: Decimal) -> entity::salary_component::Model {
    let mut model = component(id, "Tunjangan Anak", amount);
    model.category = ComponentCategory::AttachedAllowance;
    model.allowance_role = AllowanceRole::Child;
    model
}

/// An application user with the given role and an argon2-hashed password.
pub fn app_user(
    id: i64,
    username: &str,
    password: &str,
    role: UserRole,
) -> Result<entity::app_user::Model, TestError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(entity::app_user::Model {
        id,
        username: username.to_string(),
        password: hash,
        email: format!("{username}@example.com"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role,
    })
}

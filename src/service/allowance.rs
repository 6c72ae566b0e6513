use entity::salary_component::AllowanceRole;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DbErr};

use crate::data::component::ComponentRepository;

/// Current amounts of the two special allowances. Zero when no catalog
/// component holds the corresponding role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceRates {
    pub spouse: Decimal,
    pub child: Decimal,
}

/// Single source of truth for the spouse and child allowance amounts.
///
/// Resolved fresh on every aggregation: catalog edits must be visible on
/// the next read, so nothing is cached across calls.
pub struct AllowanceResolver<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllowanceResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn resolve(&self) -> Result<AllowanceRates, DbErr> {
        let component_repo = ComponentRepository::new(self.db);

        let spouse = component_repo
            .find_by_role(AllowanceRole::Spouse)
            .await?
            .map(|component| component.amount)
            .unwrap_or(Decimal::ZERO);

        let child = component_repo
            .find_by_role(AllowanceRole::Child)
            .await?
            .map(|component| component.amount)
            .unwrap_or(Decimal::ZERO);

        Ok(AllowanceRates { spouse, child })
    }
}

use entity::salary_component::{AllowanceRole, ComponentCategory, EligiblePosition, PayUnit};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{assignment::AssignmentRepository, component::ComponentRepository},
    error::{payroll::PayrollError, Error},
    model::{
        api::Page,
        component::{ComponentDto, StoreComponentDto, UpdateComponentDto},
    },
    service::payroll::normalize_search,
};

/// Salary-component catalog CRUD, including the uniqueness rule for
/// allowance roles: at most one component may carry the spouse role and one
/// the child role at any time.
pub struct ComponentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComponentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        &self,
        search: Option<&str>,
        category: Option<ComponentCategory>,
        eligible_position: Option<EligiblePosition>,
        unit: Option<PayUnit>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ComponentDto>, Error> {
        let components = ComponentRepository::new(self.db).all_ordered().await?;
        let mut rows: Vec<ComponentDto> = components.into_iter().map(Into::into).collect();

        if let Some(needle) = normalize_search(search) {
            rows.retain(|row| matches_search(row, &needle));
        }
        if let Some(category) = category {
            rows.retain(|row| row.category == category);
        }
        if let Some(eligible_position) = eligible_position {
            rows.retain(|row| row.eligible_position == eligible_position);
        }
        if let Some(unit) = unit {
            rows.retain(|row| row.unit == unit);
        }

        Ok(Page::from_rows(rows, page, per_page))
    }

    pub async fn get(&self, id: i64) -> Result<Option<ComponentDto>, Error> {
        Ok(ComponentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into))
    }

    pub async fn create(&self, mut dto: StoreComponentDto) -> Result<ComponentDto, Error> {
        let component_repo = ComponentRepository::new(self.db);

        if component_repo.find_by_id(dto.id).await?.is_some() {
            return Err(PayrollError::DuplicateComponentId(dto.id).into());
        }

        self.ensure_role_available(dto.allowance_role, dto.id).await?;

        dto.name = dto.name.trim().to_string();
        let component = component_repo.create(dto).await?;

        Ok(component.into())
    }

    pub async fn update(&self, id: i64, mut dto: UpdateComponentDto) -> Result<ComponentDto, Error> {
        let component_repo = ComponentRepository::new(self.db);

        let current = component_repo
            .find_by_id(id)
            .await?
            .ok_or(PayrollError::ComponentNotFound(id))?;

        if let Some(role) = dto.allowance_role {
            self.ensure_role_available(role, id).await?;
        }
        if let Some(name) = dto.name.take() {
            dto.name = Some(name.trim().to_string());
        }

        let component = component_repo.update(current, dto).await?;

        Ok(component.into())
    }

    /// Deletes the component and any assignment rows referencing it as one
    /// atomic operation; the schema declares no cascade.
    pub async fn remove(&self, id: i64) -> Result<(), Error> {
        if ComponentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .is_none()
        {
            return Err(PayrollError::ComponentNotFound(id).into());
        }

        let txn = self.db.begin().await?;

        AssignmentRepository::new(&txn)
            .delete_for_component(id)
            .await?;
        ComponentRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn ensure_role_available(
        &self,
        role: AllowanceRole,
        component_id: i64,
    ) -> Result<(), Error> {
        if role == AllowanceRole::None {
            return Ok(());
        }

        if let Some(holder) = ComponentRepository::new(self.db).find_by_role(role).await? {
            if holder.id != component_id {
                return Err(PayrollError::AllowanceRoleTaken {
                    role: role.as_str(),
                    holder_id: holder.id,
                }
                .into());
            }
        }

        Ok(())
    }
}

fn matches_search(row: &ComponentDto, needle: &str) -> bool {
    let haystacks = [
        row.name.to_lowercase(),
        row.category.as_str().to_lowercase(),
        row.eligible_position.as_str().to_lowercase(),
        row.unit.as_str().to_lowercase(),
        format!("{:.2}", row.amount),
    ];

    if haystacks.iter().any(|haystack| haystack.contains(needle)) {
        return true;
    }

    // Bare numbers also match the component id exactly
    needle.parse::<i64>().is_ok_and(|id| id == row.id)
}

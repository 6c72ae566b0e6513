use entity::salary_component::AllowanceRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::component::{StoreComponentDto, UpdateComponentDto};

pub struct ComponentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComponentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        dto: StoreComponentDto,
    ) -> Result<entity::salary_component::Model, DbErr> {
        let component = entity::salary_component::ActiveModel {
            id: ActiveValue::Set(dto.id),
            name: ActiveValue::Set(dto.name),
            category: ActiveValue::Set(dto.category),
            eligible_position: ActiveValue::Set(dto.eligible_position),
            amount: ActiveValue::Set(dto.amount),
            unit: ActiveValue::Set(dto.unit),
            allowance_role: ActiveValue::Set(dto.allowance_role),
        };

        component.insert(self.db).await
    }

    /// Applies the provided fields on top of the current row; absent fields
    /// stay untouched.
    pub async fn update(
        &self,
        current: entity::salary_component::Model,
        dto: UpdateComponentDto,
    ) -> Result<entity::salary_component::Model, DbErr> {
        let mut component: entity::salary_component::ActiveModel = current.into();

        if let Some(name) = dto.name {
            component.name = ActiveValue::Set(name);
        }
        if let Some(category) = dto.category {
            component.category = ActiveValue::Set(category);
        }
        if let Some(eligible_position) = dto.eligible_position {
            component.eligible_position = ActiveValue::Set(eligible_position);
        }
        if let Some(amount) = dto.amount {
            component.amount = ActiveValue::Set(amount);
        }
        if let Some(unit) = dto.unit {
            component.unit = ActiveValue::Set(unit);
        }
        if let Some(allowance_role) = dto.allowance_role {
            component.allowance_role = ActiveValue::Set(allowance_role);
        }

        component.update(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<entity::salary_component::Model>, DbErr> {
        entity::prelude::SalaryComponent::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Resolves a batch of catalog ids, ordered ascending so validation
    /// failures are reported deterministically.
    pub async fn find_many_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<entity::salary_component::Model>, DbErr> {
        entity::prelude::SalaryComponent::find()
            .filter(entity::salary_component::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::salary_component::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn all_ordered(&self) -> Result<Vec<entity::salary_component::Model>, DbErr> {
        entity::prelude::SalaryComponent::find()
            .order_by_asc(entity::salary_component::Column::Id)
            .all(self.db)
            .await
    }

    /// The current holder of an allowance role, if any. Lowest id wins if
    /// the uniqueness rule was ever bypassed, keeping resolution
    /// deterministic.
    pub async fn find_by_role(
        &self,
        role: AllowanceRole,
    ) -> Result<Option<entity::salary_component::Model>, DbErr> {
        entity::prelude::SalaryComponent::find()
            .filter(entity::salary_component::Column::AllowanceRole.eq(role))
            .order_by_asc(entity::salary_component::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::SalaryComponent::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::salary_component::AllowanceRole;
    use rust_decimal::Decimal;
    use stipend_test_utils::prelude::*;

    use crate::data::component::ComponentRepository;

    /// Expect ids resolved in ascending order regardless of request order
    #[tokio::test]
    async fn find_many_by_ids_sorted() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        test.insert_component(factory::component(300, "Tunjangan Beras", Decimal::new(30_000_00, 2)))
            .await?;
        test.insert_component(factory::component(100, "Gaji Pokok", Decimal::new(4_200_000_00, 2)))
            .await?;

        let repo = ComponentRepository::new(&test.db);
        let found = repo.find_many_by_ids(&[300, 100, 999]).await?;
        let ids: Vec<i64> = found.iter().map(|c| c.id).collect();

        assert_eq!(ids, vec![100, 300]);

        Ok(())
    }

    /// Expect the spouse-role holder to be found regardless of its name
    #[tokio::test]
    async fn find_by_role_spouse() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        test.insert_component(factory::component(1, "Gaji Pokok", Decimal::new(4_200_000_00, 2)))
            .await?;
        test.insert_component(factory::spouse_allowance(2, Decimal::new(420_000_00, 2)))
            .await?;

        let repo = ComponentRepository::new(&test.db);
        let holder = repo.find_by_role(AllowanceRole::Spouse).await?;

        assert_eq!(holder.map(|c| c.id), Some(2));

        Ok(())
    }

    /// Expect None when no component holds the requested role
    #[tokio::test]
    async fn find_by_role_none() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let repo = ComponentRepository::new(&test.db);
        let holder = repo.find_by_role(AllowanceRole::Child).await?;

        assert!(holder.is_none());

        Ok(())
    }
}

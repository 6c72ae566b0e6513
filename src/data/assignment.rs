use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
};

pub struct AssignmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// A member's assignment rows joined with their catalog components.
    pub async fn for_member_with_components(
        &self,
        member_id: i64,
    ) -> Result<
        Vec<(
            entity::assignment::Model,
            Option<entity::salary_component::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::MemberId.eq(member_id))
            .find_also_related(entity::prelude::SalaryComponent)
            .all(self.db)
            .await
    }

    /// Every assignment row joined with its component, for the aggregation
    /// engine's single-pass summary computation.
    pub async fn all_with_components(
        &self,
    ) -> Result<
        Vec<(
            entity::assignment::Model,
            Option<entity::salary_component::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Assignment::find()
            .find_also_related(entity::prelude::SalaryComponent)
            .all(self.db)
            .await
    }

    /// Which of `component_ids` are already assigned to the member.
    pub async fn existing_component_ids(
        &self,
        member_id: i64,
        component_ids: &[i64],
    ) -> Result<Vec<i64>, DbErr> {
        let rows = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::MemberId.eq(member_id))
            .filter(entity::assignment::Column::ComponentId.is_in(component_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut ids: Vec<i64> = rows.into_iter().map(|row| row.component_id).collect();
        ids.sort_unstable();

        Ok(ids)
    }

    /// Inserts one row per component id. Callers must pass a deduplicated,
    /// validated set; an empty set is a no-op.
    pub async fn insert_many(&self, member_id: i64, component_ids: &[i64]) -> Result<(), DbErr> {
        if component_ids.is_empty() {
            return Ok(());
        }

        let rows: Vec<entity::assignment::ActiveModel> = component_ids
            .iter()
            .map(|&component_id| entity::assignment::ActiveModel {
                component_id: ActiveValue::Set(component_id),
                member_id: ActiveValue::Set(member_id),
            })
            .collect();

        // exec_without_returning: the composite primary key has no
        // last-insert id to report
        entity::prelude::Assignment::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_one(
        &self,
        member_id: i64,
        component_id: i64,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::MemberId.eq(member_id))
            .filter(entity::assignment::Column::ComponentId.eq(component_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_for_member(&self, member_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await
    }

    /// Removes the member's assignments outside the target set; the replace
    /// operation's deletion step.
    pub async fn delete_for_member_not_in(
        &self,
        member_id: i64,
        keep_component_ids: &[i64],
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::MemberId.eq(member_id))
            .filter(
                entity::assignment::Column::ComponentId.is_not_in(keep_component_ids.to_vec()),
            )
            .exec(self.db)
            .await
    }

    pub async fn delete_for_component(&self, component_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::ComponentId.eq(component_id))
            .exec(self.db)
            .await
    }
}

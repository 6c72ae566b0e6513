use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::member::{StoreMemberDto, UpdateMemberDto};

pub struct MemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a member with a caller-supplied id.
    pub async fn create(&self, dto: StoreMemberDto) -> Result<entity::member::Model, DbErr> {
        let member = entity::member::ActiveModel {
            id: ActiveValue::Set(dto.id),
            first_name: ActiveValue::Set(dto.first_name),
            last_name: ActiveValue::Set(dto.last_name),
            title_prefix: ActiveValue::Set(dto.title_prefix),
            title_suffix: ActiveValue::Set(dto.title_suffix),
            position: ActiveValue::Set(dto.position),
            marital_status: ActiveValue::Set(dto.marital_status),
            child_count: ActiveValue::Set(dto.child_count),
        };

        member.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i64,
        dto: UpdateMemberDto,
    ) -> Result<entity::member::Model, DbErr> {
        let member = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(dto.first_name),
            last_name: ActiveValue::Set(dto.last_name),
            title_prefix: ActiveValue::Set(dto.title_prefix),
            title_suffix: ActiveValue::Set(dto.title_suffix),
            position: ActiveValue::Set(dto.position),
            marital_status: ActiveValue::Set(dto.marital_status),
            child_count: ActiveValue::Set(dto.child_count),
        };

        member.update(self.db).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    /// All members ordered by id; the aggregation engine's outer-join base.
    pub async fn all_ordered(&self) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns OK regardless of the member existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Member::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use entity::member::{MaritalStatus, Position};
    use stipend_test_utils::prelude::*;

    use crate::{data::member::MemberRepository, model::member::StoreMemberDto};

    fn store_dto(id: i64) -> StoreMemberDto {
        StoreMemberDto {
            id,
            first_name: "Siti".to_string(),
            last_name: "Rahayu".to_string(),
            title_prefix: Some("Dr.".to_string()),
            title_suffix: None,
            position: Position::Chair,
            marital_status: MaritalStatus::Married,
            child_count: 1,
        }
    }

    /// Expect success when creating a member with a caller-supplied id
    #[tokio::test]
    async fn create_member() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let repo = MemberRepository::new(&test.db);
        let created = repo.create(store_dto(101)).await.unwrap();

        assert_eq!(created.id, 101);
        assert_eq!(created.first_name, "Siti");
        assert_eq!(created.position, Position::Chair);

        Ok(())
    }

    /// Expect error when creating a member whose id already exists
    #[tokio::test]
    async fn create_member_duplicate_id_error() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let repo = MemberRepository::new(&test.db);
        repo.create(store_dto(101)).await.unwrap();

        let result = repo.create(store_dto(101)).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect no rows affected when deleting a member that does not exist
    #[tokio::test]
    async fn delete_member_none() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let repo = MemberRepository::new(&test.db);
        let result = repo.delete(42).await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }

    /// Expect members ordered by id regardless of insertion order
    #[tokio::test]
    async fn all_ordered_sorts_by_id() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let repo = MemberRepository::new(&test.db);
        repo.create(store_dto(20)).await.unwrap();
        repo.create(store_dto(10)).await.unwrap();

        let members = repo.all_ordered().await?;
        let ids: Vec<i64> = members.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![10, 20]);

        Ok(())
    }
}

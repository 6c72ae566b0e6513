use std::collections::HashMap;

use entity::member::Position;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{assignment::AssignmentRepository, member::MemberRepository},
    error::{payroll::PayrollError, Error},
    model::{
        api::Page,
        member::{MemberRowDto, StoreMemberDto, UpdateMemberDto},
    },
    service::payroll::normalize_search,
};

/// Member directory CRUD. List and show rows carry the plain sum of every
/// assigned component amount regardless of unit, a simpler aggregate than
/// the payroll engine's monthly total.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        position: Option<Position>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<MemberRowDto>, Error> {
        let mut rows = self.rows().await?;

        if let Some(needle) = normalize_search(search) {
            rows.retain(|row| matches_search(row, &needle));
        }

        if let Some(position) = position {
            rows.retain(|row| row.member.position == position);
        }

        Ok(Page::from_rows(rows, page, per_page))
    }

    pub async fn get(&self, id: i64) -> Result<Option<MemberRowDto>, Error> {
        let member = match MemberRepository::new(self.db).find_by_id(id).await? {
            Some(member) => member,
            None => return Ok(None),
        };

        let total = self.assigned_total(id).await?;

        Ok(Some(row(member, total)))
    }

    pub async fn create(&self, dto: StoreMemberDto) -> Result<MemberRowDto, Error> {
        let member_repo = MemberRepository::new(self.db);

        if member_repo.find_by_id(dto.id).await?.is_some() {
            return Err(PayrollError::DuplicateMemberId(dto.id).into());
        }

        let member = member_repo.create(dto).await?;

        Ok(row(member, Decimal::ZERO))
    }

    pub async fn update(&self, id: i64, dto: UpdateMemberDto) -> Result<MemberRowDto, Error> {
        let member_repo = MemberRepository::new(self.db);

        if member_repo.find_by_id(id).await?.is_none() {
            return Err(PayrollError::MemberNotFound(id).into());
        }

        let member = member_repo.update(id, dto).await?;
        let total = self.assigned_total(id).await?;

        Ok(row(member, total))
    }

    /// Deletes the member and their assignment rows as one atomic
    /// operation; the schema declares no cascade.
    pub async fn remove(&self, id: i64) -> Result<(), Error> {
        if MemberRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(PayrollError::MemberNotFound(id).into());
        }

        let txn = self.db.begin().await?;

        AssignmentRepository::new(&txn).delete_for_member(id).await?;
        MemberRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn rows(&self) -> Result<Vec<MemberRowDto>, Error> {
        let members = MemberRepository::new(self.db).all_ordered().await?;
        let joined = AssignmentRepository::new(self.db)
            .all_with_components()
            .await?;

        let mut totals: HashMap<i64, Decimal> = HashMap::new();
        for (assignment, component) in joined {
            if let Some(component) = component {
                *totals.entry(assignment.member_id).or_default() += component.amount;
            }
        }

        Ok(members
            .into_iter()
            .map(|member| {
                let total = totals.get(&member.id).copied().unwrap_or(Decimal::ZERO);

                row(member, total)
            })
            .collect())
    }

    async fn assigned_total(&self, member_id: i64) -> Result<Decimal, Error> {
        let joined = AssignmentRepository::new(self.db)
            .for_member_with_components(member_id)
            .await?;

        Ok(joined
            .into_iter()
            .filter_map(|(_, component)| component)
            .map(|component| component.amount)
            .sum())
    }
}

fn row(member: entity::member::Model, total: Decimal) -> MemberRowDto {
    MemberRowDto {
        member: member.into(),
        total_amount: total.to_f64().unwrap_or_default(),
    }
}

fn matches_search(row: &MemberRowDto, needle: &str) -> bool {
    if row.member.first_name.to_lowercase().contains(needle)
        || row.member.last_name.to_lowercase().contains(needle)
        || row.member.position.as_str().to_lowercase().contains(needle)
    {
        return true;
    }

    // Bare numbers also match the member id exactly
    needle
        .parse::<i64>()
        .is_ok_and(|id| id == row.member.id)
}

#[cfg(test)]
mod tests {
    use entity::member::Position;
    use rust_decimal::Decimal;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use stipend_test_utils::prelude::*;

    use crate::{
        error::{payroll::PayrollError, Error},
        model::member::StoreMemberDto,
        service::member::MemberService,
    };

    fn store_dto(id: i64) -> StoreMemberDto {
        let model = factory::member(id);

        StoreMemberDto {
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

    /// Creating a member with an id already in use is rejected
    #[tokio::test]
    async fn create_rejects_duplicate_id() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let service = MemberService::new(&test.db);
        service.create(store_dto(1)).await.unwrap();

        let result = service.create(store_dto(1)).await;

        assert!(matches!(
            result,
            Err(Error::PayrollError(PayrollError::DuplicateMemberId(1)))
        ));

        Ok(())
    }

    /// List rows sum every assigned component amount regardless of unit
    #[tokio::test]
    async fn list_totals_include_all_units() -> Result<(), TestError> {
        use entity::salary_component::PayUnit;

        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        test.insert_member(factory::member(1)).await?;
        test.insert_component(factory::component(10, "Gaji Pokok", Decimal::new(
            4_200_000_00,
            2,
        )))
        .await?;
        let mut daily = factory::component(11, "Uang Harian", Decimal::new(100_000_00, 2));
        daily.unit = PayUnit::Daily;
        test.insert_component(daily).await?;
        test.assign(1, 10).await?;
        test.assign(1, 11).await?;

        let page = MemberService::new(&test.db).list(None, None, 1, 10).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].total_amount, 4_300_000.0);

        Ok(())
    }

    /// Position filter and numeric id search narrow the list
    #[tokio::test]
    async fn list_filters_by_position_and_id() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        let mut chair = factory::member(1);
        chair.position = Position::Chair;
        test.insert_member(chair).await?;
        test.insert_member(factory::member(2)).await?;

        let service = MemberService::new(&test.db);

        let page = service.list(None, Some(Position::Chair), 1, 10).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].member.id, 1);

        let page = service.list(Some("2"), None, 1, 10).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].member.id, 2);

        Ok(())
    }

    /// Deleting a member removes their assignment rows in the same operation
    #[tokio::test]
    async fn remove_cascades_assignments() -> Result<(), TestError> {
        let test = TestSetup::new().await?;
        test.with_payroll_tables().await?;

        test.insert_member(factory::member(1)).await?;
        test.insert_component(factory::component(10, "Gaji Pokok", Decimal::new(
            4_200_000_00,
            2,
        )))
        .await?;
        test.assign(1, 10).await?;

        MemberService::new(&test.db).remove(1).await.unwrap();

        let members = entity::prelude::Member::find().count(&test.db).await?;
        let assignments = entity::prelude::Assignment::find().count(&test.db).await?;

        assert_eq!(members, 0);
        assert_eq!(assignments, 0);

        Ok(())
    }
}

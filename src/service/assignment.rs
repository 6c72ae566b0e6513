use std::collections::{BTreeSet, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        assignment::AssignmentRepository, component::ComponentRepository,
        member::MemberRepository,
    },
    error::{payroll::PayrollError, Error},
    model::payroll::PayrollDetailDto,
    service::payroll::PayrollAggregator,
};

/// Assignment writes: validate-then-write, with every multi-row mutation in
/// one transaction so rejected or failed batches leave no partial state.
pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that every requested component exists and is eligible for the
    /// member's position. Duplicate detection is not done here; append and
    /// replace have different duplicate semantics.
    ///
    /// Components are checked in ascending id order so the first mismatch
    /// reported is deterministic.
    pub async fn validate_components(
        &self,
        member: &entity::member::Model,
        component_ids: &[i64],
    ) -> Result<Vec<entity::salary_component::Model>, Error> {
        if component_ids.is_empty() {
            return Ok(Vec::new());
        }

        let components = ComponentRepository::new(self.db)
            .find_many_by_ids(component_ids)
            .await?;

        if components.len() != component_ids.len() {
            let found: HashSet<i64> = components.iter().map(|c| c.id).collect();
            let mut missing: Vec<i64> = component_ids
                .iter()
                .copied()
                .filter(|id| !found.contains(id))
                .collect();
            missing.sort_unstable();

            return Err(PayrollError::MissingComponents(missing).into());
        }

        for component in &components {
            if !component.eligible_position.allows(member.position) {
                return Err(PayrollError::PositionMismatch {
                    component_name: component.name.clone(),
                    position: member.position.as_str(),
                }
                .into());
            }
        }

        Ok(components)
    }

    /// Appends components to a member. Rejects the whole batch when any of
    /// them is already assigned; nothing is inserted in that case.
    pub async fn append(
        &self,
        member_id: i64,
        component_ids: &[i64],
    ) -> Result<PayrollDetailDto, Error> {
        let member = self.require_member(member_id).await?;
        let ids = dedupe(component_ids);

        self.validate_components(&member, &ids).await?;

        let existing = AssignmentRepository::new(self.db)
            .existing_component_ids(member_id, &ids)
            .await?;
        if !existing.is_empty() {
            return Err(PayrollError::DuplicateAssignment(existing).into());
        }

        let txn = self.db.begin().await?;
        AssignmentRepository::new(&txn)
            .insert_many(member_id, &ids)
            .await?;
        txn.commit().await?;

        self.refreshed_detail(member_id).await
    }

    /// Replaces a member's full component set with the target set, which
    /// may be empty. Rows outside the target are deleted, missing target
    /// rows inserted; already-present rows are left alone, which makes the
    /// operation idempotent.
    pub async fn replace(
        &self,
        member_id: i64,
        component_ids: &[i64],
    ) -> Result<PayrollDetailDto, Error> {
        let member = self.require_member(member_id).await?;
        let ids = dedupe(component_ids);

        self.validate_components(&member, &ids).await?;

        let txn = self.db.begin().await?;
        let assignment_repo = AssignmentRepository::new(&txn);

        if ids.is_empty() {
            assignment_repo.delete_for_member(member_id).await?;
        } else {
            assignment_repo
                .delete_for_member_not_in(member_id, &ids)
                .await?;

            let existing = assignment_repo
                .existing_component_ids(member_id, &ids)
                .await?;
            let to_insert: Vec<i64> = ids
                .iter()
                .copied()
                .filter(|id| !existing.contains(id))
                .collect();

            assignment_repo.insert_many(member_id, &to_insert).await?;
        }

        txn.commit().await?;

        self.refreshed_detail(member_id).await
    }

    /// Removes a single (member, component) relation.
    pub async fn remove_component(
        &self,
        member_id: i64,
        component_id: i64,
    ) -> Result<PayrollDetailDto, Error> {
        self.require_member(member_id).await?;

        let deleted = AssignmentRepository::new(self.db)
            .delete_one(member_id, component_id)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(PayrollError::RelationNotFound {
                member_id,
                component_id,
            }
            .into());
        }

        self.refreshed_detail(member_id).await
    }

    /// Removes every assignment the member has.
    pub async fn clear(&self, member_id: i64) -> Result<(), Error> {
        self.require_member(member_id).await?;

        AssignmentRepository::new(self.db)
            .delete_for_member(member_id)
            .await?;

        Ok(())
    }

    async fn require_member(&self, member_id: i64) -> Result<entity::member::Model, Error> {
        MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| PayrollError::MemberNotFound(member_id).into())
    }

    async fn refreshed_detail(&self, member_id: i64) -> Result<PayrollDetailDto, Error> {
        PayrollAggregator::new(self.db)
            .detail(member_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "member {member_id} disappeared while building the refreshed detail payload"
                ))
            })
    }
}

fn dedupe(ids: &[i64]) -> Vec<i64> {
    let unique: BTreeSet<i64> = ids.iter().copied().collect();

    unique.into_iter().collect()
}

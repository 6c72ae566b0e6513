use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251001_000001_member::Member, m20251001_000002_salary_component::SalaryComponent,
};

static PK_ASSIGNMENT: &str = "pk-assignment";
static FK_ASSIGNMENT_COMPONENT_ID: &str = "fk-assignment-component_id";
static FK_ASSIGNMENT_MEMBER_ID: &str = "fk-assignment-member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No surrogate id: the composite primary key enforces at most one
        // assignment per (component, member) pair at the schema level.
        // Cascading deletes are deliberately absent; application code owns
        // them inside explicit transactions.
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(big_integer(Assignment::ComponentId))
                    .col(big_integer(Assignment::MemberId))
                    .primary_key(
                        Index::create()
                            .name(PK_ASSIGNMENT)
                            .col(Assignment::ComponentId)
                            .col(Assignment::MemberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASSIGNMENT_COMPONENT_ID)
                            .from(Assignment::Table, Assignment::ComponentId)
                            .to(SalaryComponent::Table, SalaryComponent::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASSIGNMENT_MEMBER_ID)
                            .from(Assignment::Table, Assignment::MemberId)
                            .to(Member::Table, Member::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    ComponentId,
    MemberId,
}

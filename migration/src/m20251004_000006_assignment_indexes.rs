use sea_orm_migration::prelude::*;

use crate::m20251001_000003_assignment::Assignment;

static IDX_ASSIGNMENT_MEMBER_ID: &str = "idx-assignment-member_id";
static IDX_ASSIGNMENT_COMPONENT_ID: &str = "idx-assignment-component_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_MEMBER_ID)
                    .table(Assignment::Table)
                    .col(Assignment::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_COMPONENT_ID)
                    .table(Assignment::Table)
                    .col(Assignment::ComponentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENT_COMPONENT_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENT_MEMBER_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(big_integer(Member::Id).primary_key())
                    .col(string_len(Member::FirstName, 100))
                    .col(string_len(Member::LastName, 100))
                    .col(string_len_null(Member::TitlePrefix, 50))
                    .col(string_len_null(Member::TitleSuffix, 50))
                    .col(string_len(Member::Position, 20))
                    .col(string_len(Member::MaritalStatus, 20))
                    .col(integer(Member::ChildCount).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    FirstName,
    LastName,
    TitlePrefix,
    TitleSuffix,
    Position,
    MaritalStatus,
    ChildCount,
}

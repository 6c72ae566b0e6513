use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(big_integer(AppUser::Id).primary_key())
                    .col(string_len_uniq(AppUser::Username, 15))
                    .col(string_len(AppUser::Password, 128))
                    .col(string_len_uniq(AppUser::Email, 255))
                    .col(string_len(AppUser::FirstName, 100))
                    .col(string_len(AppUser::LastName, 100))
                    .col(string_len(AppUser::Role, 10))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    Username,
    Password,
    Email,
    FirstName,
    LastName,
    Role,
}

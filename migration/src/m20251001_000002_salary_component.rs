use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalaryComponent::Table)
                    .if_not_exists()
                    .col(big_integer(SalaryComponent::Id).primary_key())
                    .col(string_len(SalaryComponent::Name, 100))
                    .col(string_len(SalaryComponent::Category, 20))
                    .col(string_len(SalaryComponent::EligiblePosition, 20))
                    .col(decimal_len(SalaryComponent::Amount, 17, 2))
                    .col(string_len(SalaryComponent::Unit, 10))
                    .col(string_len(SalaryComponent::AllowanceRole, 10).default("none"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalaryComponent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SalaryComponent {
    Table,
    Id,
    Name,
    Category,
    EligiblePosition,
    Amount,
    Unit,
    AllowanceRole,
}

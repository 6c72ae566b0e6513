pub use sea_orm_migration::prelude::*;

mod m20251001_000001_member;
mod m20251001_000002_salary_component;
mod m20251001_000003_assignment;
mod m20251001_000004_app_user;
mod m20251001_000005_revoked_token;
mod m20251004_000006_assignment_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_member::Migration),
            Box::new(m20251001_000002_salary_component::Migration),
            Box::new(m20251001_000003_assignment::Migration),
            Box::new(m20251001_000004_app_user::Migration),
            Box::new(m20251001_000005_revoked_token::Migration),
            Box::new(m20251004_000006_assignment_indexes::Migration),
        ]
    }
}

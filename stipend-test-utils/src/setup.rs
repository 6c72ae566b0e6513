use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ActiveValue, ConnectionTrait, Database,
    DatabaseConnection, DbBackend, EntityTrait, Schema,
};

use crate::TestError;

/// In-memory SQLite database for repository, service, and controller tests.
///
/// Starts with no tables so error paths can be exercised; call one of the
/// `with_*` helpers to create the schema a test needs.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the member, salary component, and assignment tables.
    pub async fn with_payroll_tables(&self) -> Result<(), TestError> {
        let schema = Schema::new(DbBackend::Sqlite);

        self.with_tables(vec![
            schema.create_table_from_entity(entity::prelude::Member),
            schema.create_table_from_entity(entity::prelude::SalaryComponent),
            schema.create_table_from_entity(entity::prelude::Assignment),
        ])
        .await
    }

    /// Creates the app user and revoked token tables.
    pub async fn with_auth_tables(&self) -> Result<(), TestError> {
        let schema = Schema::new(DbBackend::Sqlite);

        self.with_tables(vec![
            schema.create_table_from_entity(entity::prelude::AppUser),
            schema.create_table_from_entity(entity::prelude::RevokedToken),
        ])
        .await
    }

    pub async fn insert_member(
        &self,
        model: entity::member::Model,
    ) -> Result<entity::member::Model, TestError> {
        let active = entity::member::ActiveModel {
            id: ActiveValue::Set(model.id),
            first_name: ActiveValue::Set(model.first_name),
            last_name: ActiveValue::Set(model.last_name),
            title_prefix: ActiveValue::Set(model.title_prefix),
            title_suffix: ActiveValue::Set(model.title_suffix),
            position: ActiveValue::Set(model.position),
            marital_status: ActiveValue::Set(model.marital_status),
            child_count: ActiveValue::Set(model.child_count),
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn insert_component(
        &self,
        model: entity::salary_component::Model,
    ) -> Result<entity::salary_component::Model, TestError> {
        let active = entity::salary_component::ActiveModel {
            id: ActiveValue::Set(model.id),
            name: ActiveValue::Set(model.name),
            category: ActiveValue::Set(model.category),
            eligible_position: ActiveValue::Set(model.eligible_position),
            amount: ActiveValue::Set(model.amount),
            unit: ActiveValue::Set(model.unit),
            allowance_role: ActiveValue::Set(model.allowance_role),
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn assign(&self, member_id: i64, component_id: i64) -> Result<(), TestError> {
        let active = entity::assignment::ActiveModel {
            component_id: ActiveValue::Set(component_id),
            member_id: ActiveValue::Set(member_id),
        };

        entity::prelude::Assignment::insert(active)
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    pub async fn insert_user(
        &self,
        model: entity::app_user::Model,
    ) -> Result<entity::app_user::Model, TestError> {
        let active = entity::app_user::ActiveModel {
            id: ActiveValue::Set(model.id),
            username: ActiveValue::Set(model.username),
            password: ActiveValue::Set(model.password),
            email: ActiveValue::Set(model.email),
            first_name: ActiveValue::Set(model.first_name),
            last_name: ActiveValue::Set(model.last_name),
            role: ActiveValue::Set(model.role),
        };

        Ok(active.insert(&self.db).await?)
    }
}

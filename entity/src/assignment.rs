use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction row recording that a member currently receives a component.
/// The composite primary key is the uniqueness backstop for concurrent
/// writers; no surrogate id exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub component_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::salary_component::Entity",
        from = "Column::ComponentId",
        to = "super::salary_component::Column::Id"
    )]
    SalaryComponent,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::salary_component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalaryComponent.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Seat a member holds in the legislative body.
///
/// Stored values keep the source system's vocabulary since component
/// eligibility and public payloads are expressed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Position {
    #[sea_orm(string_value = "Ketua")]
    #[serde(rename = "Ketua")]
    Chair,
    #[sea_orm(string_value = "Wakil Ketua")]
    #[serde(rename = "Wakil Ketua")]
    ViceChair,
    #[sea_orm(string_value = "Anggota")]
    #[serde(rename = "Anggota")]
    Member,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chair => "Ketua",
            Self::ViceChair => "Wakil Ketua",
            Self::Member => "Anggota",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum MaritalStatus {
    #[sea_orm(string_value = "Kawin")]
    #[serde(rename = "Kawin")]
    Married,
    #[sea_orm(string_value = "Belum Kawin")]
    #[serde(rename = "Belum Kawin")]
    Single,
    #[sea_orm(string_value = "Cerai Hidup")]
    #[serde(rename = "Cerai Hidup")]
    DivorcedLiving,
    #[sea_orm(string_value = "Cerai Mati")]
    #[serde(rename = "Cerai Mati")]
    DivorcedDeceased,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Married => "Kawin",
            Self::Single => "Belum Kawin",
            Self::DivorcedLiving => "Cerai Hidup",
            Self::DivorcedDeceased => "Cerai Mati",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member")]
pub struct Model {
    /// Externally assigned, not auto-incremented.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title_prefix: Option<String>,
    pub title_suffix: Option<String>,
    pub position: Position,
    pub marital_status: MaritalStatus,
    pub child_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::member::Position;

/// Category ordering follows declaration order; detail payloads sort
/// components by it, matching the source schema's enum column ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ComponentCategory {
    #[sea_orm(string_value = "Gaji Pokok")]
    #[serde(rename = "Gaji Pokok")]
    BaseSalary,
    #[sea_orm(string_value = "Tunjangan Melekat")]
    #[serde(rename = "Tunjangan Melekat")]
    AttachedAllowance,
    #[sea_orm(string_value = "Tunjangan Lain")]
    #[serde(rename = "Tunjangan Lain")]
    OtherAllowance,
}

impl ComponentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseSalary => "Gaji Pokok",
            Self::AttachedAllowance => "Tunjangan Melekat",
            Self::OtherAllowance => "Tunjangan Lain",
        }
    }
}

/// Which positions a component may be assigned to. `All` ("Semua") matches
/// every member position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EligiblePosition {
    #[sea_orm(string_value = "Ketua")]
    #[serde(rename = "Ketua")]
    Chair,
    #[sea_orm(string_value = "Wakil Ketua")]
    #[serde(rename = "Wakil Ketua")]
    ViceChair,
    #[sea_orm(string_value = "Anggota")]
    #[serde(rename = "Anggota")]
    Member,
    #[sea_orm(string_value = "Semua")]
    #[serde(rename = "Semua")]
    All,
}

impl EligiblePosition {
    pub fn allows(&self, position: Position) -> bool {
        match self {
            Self::All => true,
            Self::Chair => position == Position::Chair,
            Self::ViceChair => position == Position::ViceChair,
            Self::Member => position == Position::Member,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chair => "Ketua",
            Self::ViceChair => "Wakil Ketua",
            Self::Member => "Anggota",
            Self::All => "Semua",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum PayUnit {
    #[sea_orm(string_value = "Bulan")]
    #[serde(rename = "Bulan")]
    Monthly,
    #[sea_orm(string_value = "Hari")]
    #[serde(rename = "Hari")]
    Daily,
    #[sea_orm(string_value = "Periode")]
    #[serde(rename = "Periode")]
    PerTerm,
}

impl PayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Bulan",
            Self::Daily => "Hari",
            Self::PerTerm => "Periode",
        }
    }
}

/// Marks the two components whose amounts are applied as conditional
/// addends (spouse) or capped addends (child) instead of entering the plain
/// monthly sum. At most one component may hold each non-`None` role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum AllowanceRole {
    #[sea_orm(string_value = "none")]
    #[serde(rename = "none")]
    None,
    #[sea_orm(string_value = "spouse")]
    #[serde(rename = "spouse")]
    Spouse,
    #[sea_orm(string_value = "child")]
    #[serde(rename = "child")]
    Child,
}

impl AllowanceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Spouse => "spouse",
            Self::Child => "child",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_component")]
pub struct Model {
    /// Externally assigned, not auto-incremented.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub category: ComponentCategory,
    pub eligible_position: EligiblePosition,
    #[sea_orm(column_type = "Decimal(Some((17, 2)))")]
    pub amount: Decimal,
    pub unit: PayUnit,
    pub allowance_role: AllowanceRole,
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

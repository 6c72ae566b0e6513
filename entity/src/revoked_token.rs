use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Revocation entry for a logged-out bearer token, keyed by the SHA-256 hex
/// digest of the raw token. Rows past `expires_at` are dead weight only;
/// the token they cover is already expired.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "revoked_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub token_hash: String,
    pub expires_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

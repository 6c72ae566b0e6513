use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct RevokedTokenRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RevokedTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a token hash as revoked. Revoking the same token twice just
    /// refreshes the stored expiry.
    pub async fn revoke(&self, token_hash: &str, expires_at: NaiveDateTime) -> Result<(), DbErr> {
        let row = entity::revoked_token::ActiveModel {
            token_hash: ActiveValue::Set(token_hash.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        };

        entity::prelude::RevokedToken::insert(row)
            .on_conflict(
                OnConflict::column(entity::revoked_token::Column::TokenHash)
                    .update_column(entity::revoked_token::Column::ExpiresAt)
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_revoked(&self, token_hash: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RevokedToken::find()
            .filter(entity::revoked_token::Column::TokenHash.eq(token_hash))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

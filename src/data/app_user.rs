use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct AppUserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(id).one(self.db).await
    }
}

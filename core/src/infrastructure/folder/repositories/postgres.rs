use sqlx::PgPool;

use crate::domain::{
    common::CoreError,
    folder::{
        entities::{Folder, FolderId, FruitType},
        ports::FolderRepository,
    },
    user::entities::UserId,
};

#[derive(Clone)]
pub struct PostgresFolderRepository {
    pub(crate) pool: PgPool,
}

impl PostgresFolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FolderRepository for PostgresFolderRepository {
    async fn find_by_id(&self, id: &FolderId) -> Result<Option<Folder>, CoreError> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, user_id, name, fruit
            FROM folders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(folder)
    }

    async fn find_by_user_and_fruit(
        &self,
        user_id: &UserId,
        fruit: &FruitType,
    ) -> Result<Option<Folder>, CoreError> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, user_id, name, fruit
            FROM folders
            WHERE user_id = $1 AND fruit = $2
            "#,
        )
        .bind(user_id.0)
        .bind(fruit.clone())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(folder)
    }
}

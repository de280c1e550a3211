use sqlx::PgPool;

use crate::domain::{
    common::CoreError,
    user::{
        entities::{User, UserId},
        ports::UserRepository,
    },
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pub(crate) pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, CoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, nickname, user_image
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(user)
    }
}

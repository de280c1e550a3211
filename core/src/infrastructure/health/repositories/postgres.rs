use sqlx::PgPool;

use crate::domain::{common::CoreError, health::port::HealthRepository};

#[derive(Clone)]
pub struct PostgresHealthRepository {
    pub(crate) pool: PgPool,
}

impl PostgresHealthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl HealthRepository for PostgresHealthRepository {
    async fn ping(&self) -> Result<(), CoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|_| CoreError::Unhealthy)?;

        Ok(())
    }
}

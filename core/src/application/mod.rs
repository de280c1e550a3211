use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{
    domain::common::{CoreError, services::Service},
    infrastructure::{
        folder::repositories::postgres::PostgresFolderRepository,
        health::repositories::postgres::PostgresHealthRepository,
        message::repositories::postgres::PostgresMessageRepository,
        user::repositories::postgres::PostgresUserRepository,
    },
};

/// Concrete service type with PostgreSQL repositories.
pub type GroveService = Service<
    PostgresUserRepository,
    PostgresFolderRepository,
    PostgresMessageRepository,
    PostgresHealthRepository,
>;

#[derive(Clone)]
pub struct GroveRepositories {
    pool: PgPool,
    pub user_repository: PostgresUserRepository,
    pub folder_repository: PostgresFolderRepository,
    pub message_repository: PostgresMessageRepository,
    pub health_repository: PostgresHealthRepository,
}

pub async fn create_repositories(
    pg_connection_options: PgConnectOptions,
) -> Result<GroveRepositories, CoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(pg_connection_options)
        .await
        .map_err(|e| CoreError::ServiceUnavailable(e.to_string()))?;

    Ok(GroveRepositories {
        user_repository: PostgresUserRepository::new(pool.clone()),
        folder_repository: PostgresFolderRepository::new(pool.clone()),
        message_repository: PostgresMessageRepository::new(pool.clone()),
        health_repository: PostgresHealthRepository::new(pool.clone()),
        pool,
    })
}

impl From<GroveRepositories> for GroveService {
    fn from(repositories: GroveRepositories) -> Self {
        Service::new(
            repositories.user_repository,
            repositories.folder_repository,
            repositories.message_repository,
            repositories.health_repository,
        )
    }
}

impl GroveRepositories {
    pub async fn shutdown_pool(&self) {
        self.pool.close().await;
    }
}

impl GroveService {
    pub async fn shutdown_pool(&self) {
        self.message_repository.pool.close().await;
    }
}

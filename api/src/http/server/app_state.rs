use grove_core::{GroveService, application::GroveRepositories};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: GroveService,
}

impl AppState {
    pub fn new(service: GroveService) -> Self {
        Self { service }
    }

    /// Shutdown the underlying database pool
    pub async fn shutdown(&self) {
        self.service.shutdown_pool().await
    }
}

impl From<GroveRepositories> for AppState {
    fn from(repositories: GroveRepositories) -> Self {
        AppState {
            service: repositories.into(),
        }
    }
}

use crate::domain::{
    common::services::Service,
    common::CoreError,
    folder::ports::FolderRepository,
    health::port::{HealthRepository, HealthService},
    message::ports::MessageRepository,
    user::ports::UserRepository,
};

impl<U, F, M, H> HealthService for Service<U, F, M, H>
where
    U: UserRepository,
    F: FolderRepository,
    M: MessageRepository,
    H: HealthRepository,
{
    async fn healthy(&self) -> Result<(), CoreError> {
        self.health_repository.ping().await
    }
}

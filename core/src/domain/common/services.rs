use crate::domain::{
    folder::ports::FolderRepository, health::port::HealthRepository,
    message::ports::MessageRepository, user::ports::UserRepository,
};

#[derive(Clone)]
pub struct Service<U, F, M, H>
where
    U: UserRepository,
    F: FolderRepository,
    M: MessageRepository,
    H: HealthRepository,
{
    pub(crate) user_repository: U,
    pub(crate) folder_repository: F,
    pub(crate) message_repository: M,
    pub(crate) health_repository: H,
}

impl<U, F, M, H> Service<U, F, M, H>
where
    U: UserRepository,
    F: FolderRepository,
    M: MessageRepository,
    H: HealthRepository,
{
    pub fn new(
        user_repository: U,
        folder_repository: F,
        message_repository: M,
        health_repository: H,
    ) -> Self {
        Self {
            user_repository,
            folder_repository,
            message_repository,
            health_repository,
        }
    }
}

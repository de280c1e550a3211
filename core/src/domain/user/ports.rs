use std::sync::{Arc, Mutex};

use crate::domain::{
    common::CoreError,
    user::entities::{User, UserId},
};

pub trait UserRepository: Send + Sync {
    fn find_by_id(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().unwrap();

        let user = users.iter().find(|u| &u.id == id).cloned();

        Ok(user)
    }
}

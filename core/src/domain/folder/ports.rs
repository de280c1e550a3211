use std::sync::{Arc, Mutex};

use crate::domain::{
    common::CoreError,
    folder::entities::{Folder, FolderId, FruitType},
    user::entities::UserId,
};

pub trait FolderRepository: Send + Sync {
    fn find_by_id(
        &self,
        id: &FolderId,
    ) -> impl Future<Output = Result<Option<Folder>, CoreError>> + Send;

    fn find_by_user_and_fruit(
        &self,
        user_id: &UserId,
        fruit: &FruitType,
    ) -> impl Future<Output = Result<Option<Folder>, CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockFolderRepository {
    folders: Arc<Mutex<Vec<Folder>>>,
}

impl MockFolderRepository {
    pub fn new() -> Self {
        Self {
            folders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn insert(&self, folder: Folder) {
        self.folders.lock().unwrap().push(folder);
    }
}

impl FolderRepository for MockFolderRepository {
    async fn find_by_id(&self, id: &FolderId) -> Result<Option<Folder>, CoreError> {
        let folders = self.folders.lock().unwrap();

        let folder = folders.iter().find(|f| &f.id == id).cloned();

        Ok(folder)
    }

    async fn find_by_user_and_fruit(
        &self,
        user_id: &UserId,
        fruit: &FruitType,
    ) -> Result<Option<Folder>, CoreError> {
        let folders = self.folders.lock().unwrap();

        let folder = folders
            .iter()
            .find(|f| &f.user_id == user_id && &f.fruit == fruit)
            .cloned();

        Ok(folder)
    }
}

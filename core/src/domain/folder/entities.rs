use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::entities::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(transparent)]
pub struct FolderId(pub i64);

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FolderId {
    fn from(id: i64) -> Self {
        FolderId(id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type, Default, ToSchema)]
#[sqlx(type_name = "fruit_type", rename_all = "lowercase")]
pub enum FruitType {
    /// The tree every user gets at signup; messages land here when no
    /// folder is given.
    #[default]
    Default,
    Custom,
}

/// A "tree": a named grouping of messages belonging to one user.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, sqlx::FromRow)]
pub struct Folder {
    pub id: FolderId,
    pub user_id: UserId,
    pub name: String,
    pub fruit: FruitType,
}

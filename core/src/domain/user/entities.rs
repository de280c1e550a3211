use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

/// Sender id recorded when a message is sent without logging in.
pub const GUEST_SENDER_ID: UserId = UserId(-1);

impl UserId {
    pub fn is_guest(&self) -> bool {
        *self == GUEST_SENDER_ID
    }
}

/// Users are managed by the account service; this crate only reads them.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub nickname: String,
    pub user_image: String,
}

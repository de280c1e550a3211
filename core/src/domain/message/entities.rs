use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::folder::entities::FolderId;
use crate::domain::user::entities::{User, UserId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(transparent)]
pub struct MessageId(pub i64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        MessageId(id)
    }
}

/// A user may keep at most this many messages open ("fruited") at once.
pub const MAX_OPEN_MESSAGES: usize = 8;

/// Placeholders shown in place of the sender for anonymous messages.
pub const ANONYMOUS_NICKNAME: &str = "anonymous";
pub const ANONYMOUS_PROFILE_IMAGE: &str = "default_profile_image";

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, sqlx::FromRow)]
pub struct Message {
    pub id: MessageId,
    /// Recipient. Fixed at creation; only the folder and the flags below
    /// change afterwards.
    pub user_id: UserId,
    pub sender_id: UserId,
    pub folder_id: FolderId,
    pub content: String,
    pub anonymous: bool,
    pub already_read: bool,
    /// Publicly visible ("fruited").
    pub opening: bool,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InsertMessageInput {
    pub user_id: UserId,
    pub sender_id: UserId,
    pub folder_id: FolderId,
    pub content: String,
    pub anonymous: bool,
    pub already_read: bool,
}

/// Watering request: send a compliment message to `receiver_id`. When
/// `folder_id` is omitted the message lands in the receiver's default tree.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateMessageRequest {
    pub receiver_id: UserId,
    pub folder_id: Option<FolderId>,
    #[serde(default)]
    pub anonymous: bool,
    pub content: String,
}

/// One row of the message box, with the sender already resolved (or masked).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct MessageBoxResponse {
    pub id: MessageId,
    pub content: String,
    pub anonymous: bool,
    pub already_read: bool,
    pub opening: bool,
    pub favorite: bool,
    pub sender_nickname: String,
    pub sender_profile_image: String,
    pub created_at: DateTime<Utc>,
}

impl MessageBoxResponse {
    pub fn of(message: &Message, sender: &User) -> Self {
        Self::with_sender(message, sender.nickname.clone(), sender.user_image.clone())
    }

    pub fn masked(message: &Message) -> Self {
        Self::with_sender(
            message,
            ANONYMOUS_NICKNAME.to_string(),
            ANONYMOUS_PROFILE_IMAGE.to_string(),
        )
    }

    fn with_sender(message: &Message, nickname: String, profile_image: String) -> Self {
        Self {
            id: message.id,
            content: message.content.clone(),
            anonymous: message.anonymous,
            already_read: message.already_read,
            opening: message.opening,
            favorite: message.favorite,
            sender_nickname: nickname,
            sender_profile_image: profile_image,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct MessagePage {
    pub messages: Vec<MessageBoxResponse>,
    pub has_next: bool,
}

use std::sync::{Arc, Mutex};

use crate::domain::{
    common::{CoreError, GetPaginated, HasNextPage},
    folder::entities::FolderId,
    message::entities::{CreateMessageRequest, InsertMessageInput, Message, MessageId, MessagePage},
    user::entities::UserId,
};

pub trait MessageRepository: Send + Sync {
    fn insert(
        &self,
        input: InsertMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: &MessageId,
    ) -> impl Future<Output = Result<Option<Message>, CoreError>> + Send;

    fn find_by_id_and_user(
        &self,
        id: &MessageId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Message>, CoreError>> + Send;

    /// Messages of `user_id` in `folder_id`, newest first. The has-next
    /// flag comes from probing one row past the requested page.
    fn list_by_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<(Vec<Message>, HasNextPage), CoreError>> + Send;

    fn list_favorites(
        &self,
        user_id: &UserId,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<(Vec<Message>, HasNextPage), CoreError>> + Send;

    /// Replaces the set of opened messages for `user_id` with exactly
    /// `message_ids`. All-or-nothing: a missing or foreign-owned id fails
    /// the whole call and leaves every flag untouched.
    fn replace_opening(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deletes the given messages of `user_id`. All-or-nothing.
    fn delete_all(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Reassigns the given messages of `user_id` to `folder_id`.
    /// All-or-nothing.
    fn move_to_folder(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
        folder_id: &FolderId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_favorite(
        &self,
        user_id: &UserId,
        id: &MessageId,
        favorite: bool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn mark_read(
        &self,
        user_id: &UserId,
        id: &MessageId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Business operations of the message box.
///
/// Ports-and-adapters seam: handlers talk to this trait, the
/// implementation lives on [`Service`](crate::domain::common::services::Service)
/// and delegates persistence to [`MessageRepository`].
pub trait MessageService: Send + Sync {
    /// Watering: send a compliment message.
    ///
    /// Resolves the receiver (`USER_NOT_FOUND` if absent) and the target
    /// tree (receiver's default tree when `folder_id` is omitted,
    /// `TREE_NOT_FOUND` otherwise). A guest sender always produces an
    /// anonymous message; a self-sent message starts out read.
    fn create_message(
        &self,
        sender_id: UserId,
        request: CreateMessageRequest,
    ) -> impl Future<Output = Result<MessageId, CoreError>> + Send;

    /// One page of the user's message box, newest first. Anonymous
    /// messages carry the fixed placeholder sender identity.
    fn list_messages(
        &self,
        user_id: &UserId,
        folder_id: Option<FolderId>,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<MessagePage, CoreError>> + Send;

    /// Fruiting: replace the user's opened set with exactly `message_ids`.
    /// Rejects more than [`MAX_OPEN_MESSAGES`](crate::domain::message::entities::MAX_OPEN_MESSAGES)
    /// ids before touching anything.
    fn update_opening(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_messages(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn move_messages(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
        folder_id: &FolderId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_favorite(
        &self,
        user_id: &UserId,
        message_id: &MessageId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// One page of the user's favorite messages, newest first. The real
    /// sender is always resolved here, anonymous or not.
    fn list_favorites(
        &self,
        user_id: &UserId,
        pagination: &GetPaginated,
    ) -> impl Future<Output = Result<MessagePage, CoreError>> + Send;

    fn mark_read(
        &self,
        user_id: &UserId,
        message_id: &MessageId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    fn paginate(
        mut matched: Vec<Message>,
        pagination: &GetPaginated,
    ) -> (Vec<Message>, HasNextPage) {
        // Newest first; ids are monotonic so they break created_at ties.
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));

        let offset = ((pagination.page - 1) * pagination.limit) as usize;
        let limit = pagination.limit as usize;
        let has_next = matched.len() > offset + limit;

        let page = matched.into_iter().skip(offset).take(limit).collect();

        (page, has_next)
    }

    fn check_all_owned(
        messages: &[Message],
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        for id in message_ids {
            if !messages
                .iter()
                .any(|m| &m.id == id && &m.user_id == user_id)
            {
                return Err(CoreError::MessageNotFound {
                    id: *id,
                    user_id: *user_id,
                });
            }
        }
        Ok(())
    }
}

impl MessageRepository for MockMessageRepository {
    async fn insert(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        let mut messages = self.messages.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let new_message = Message {
            id: MessageId(*next_id),
            user_id: input.user_id,
            sender_id: input.sender_id,
            folder_id: input.folder_id,
            content: input.content,
            anonymous: input.anonymous,
            already_read: input.already_read,
            opening: false,
            favorite: false,
            created_at: chrono::Utc::now(),
        };
        *next_id += 1;

        messages.push(new_message.clone());

        Ok(new_message)
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        let messages = self.messages.lock().unwrap();

        Ok(messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn find_by_id_and_user(
        &self,
        id: &MessageId,
        user_id: &UserId,
    ) -> Result<Option<Message>, CoreError> {
        let messages = self.messages.lock().unwrap();

        Ok(messages
            .iter()
            .find(|m| &m.id == id && &m.user_id == user_id)
            .cloned())
    }

    async fn list_by_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, HasNextPage), CoreError> {
        let messages = self.messages.lock().unwrap();

        let matched: Vec<Message> = messages
            .iter()
            .filter(|m| &m.user_id == user_id && &m.folder_id == folder_id)
            .cloned()
            .collect();

        Ok(Self::paginate(matched, pagination))
    }

    async fn list_favorites(
        &self,
        user_id: &UserId,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, HasNextPage), CoreError> {
        let messages = self.messages.lock().unwrap();

        let matched: Vec<Message> = messages
            .iter()
            .filter(|m| &m.user_id == user_id && m.favorite)
            .cloned()
            .collect();

        Ok(Self::paginate(matched, pagination))
    }

    async fn replace_opening(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        let mut messages = self.messages.lock().unwrap();

        // Validate before mutating so a miss leaves every flag untouched.
        Self::check_all_owned(&messages, user_id, message_ids)?;

        for message in messages.iter_mut().filter(|m| &m.user_id == user_id) {
            message.opening = message_ids.contains(&message.id);
        }

        Ok(())
    }

    async fn delete_all(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        let mut messages = self.messages.lock().unwrap();

        Self::check_all_owned(&messages, user_id, message_ids)?;

        messages.retain(|m| !(message_ids.contains(&m.id) && &m.user_id == user_id));

        Ok(())
    }

    async fn move_to_folder(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
        folder_id: &FolderId,
    ) -> Result<(), CoreError> {
        let mut messages = self.messages.lock().unwrap();

        Self::check_all_owned(&messages, user_id, message_ids)?;

        for message in messages
            .iter_mut()
            .filter(|m| message_ids.contains(&m.id) && &m.user_id == user_id)
        {
            message.folder_id = *folder_id;
        }

        Ok(())
    }

    async fn update_favorite(
        &self,
        user_id: &UserId,
        id: &MessageId,
        favorite: bool,
    ) -> Result<(), CoreError> {
        let mut messages = self.messages.lock().unwrap();

        let message = messages
            .iter_mut()
            .find(|m| &m.id == id && &m.user_id == user_id)
            .ok_or(CoreError::MessageNotFound {
                id: *id,
                user_id: *user_id,
            })?;

        message.favorite = favorite;

        Ok(())
    }

    async fn mark_read(&self, user_id: &UserId, id: &MessageId) -> Result<(), CoreError> {
        let mut messages = self.messages.lock().unwrap();

        let message = messages
            .iter_mut()
            .find(|m| &m.id == id && &m.user_id == user_id)
            .ok_or(CoreError::MessageNotFound {
                id: *id,
                user_id: *user_id,
            })?;

        message.already_read = true;

        Ok(())
    }
}

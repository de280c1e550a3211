use crate::domain::{
    common::{CoreError, GetPaginated, services::Service},
    folder::{
        entities::{Folder, FolderId, FruitType},
        ports::FolderRepository,
    },
    health::port::HealthRepository,
    message::{
        entities::{
            CreateMessageRequest, InsertMessageInput, MAX_OPEN_MESSAGES, MessageBoxResponse,
            MessageId, MessagePage,
        },
        ports::{MessageRepository, MessageService},
    },
    user::{entities::UserId, ports::UserRepository},
};

impl<U, F, M, H> Service<U, F, M, H>
where
    U: UserRepository,
    F: FolderRepository,
    M: MessageRepository,
    H: HealthRepository,
{
    async fn resolve_folder(
        &self,
        user_id: &UserId,
        folder_id: Option<FolderId>,
    ) -> Result<Folder, CoreError> {
        match folder_id {
            Some(id) => self
                .folder_repository
                .find_by_id(&id)
                .await?
                .ok_or(CoreError::TreeNotFound { id }),
            None => self
                .folder_repository
                .find_by_user_and_fruit(user_id, &FruitType::Default)
                .await?
                .ok_or(CoreError::DefaultTreeNotFound { user_id: *user_id }),
        }
    }
}

impl<U, F, M, H> MessageService for Service<U, F, M, H>
where
    U: UserRepository,
    F: FolderRepository,
    M: MessageRepository,
    H: HealthRepository,
{
    async fn create_message(
        &self,
        sender_id: UserId,
        request: CreateMessageRequest,
    ) -> Result<MessageId, CoreError> {
        if request.content.trim().is_empty() {
            return Err(CoreError::InvalidInput {
                msg: "message content cannot be empty".to_string(),
            });
        }

        let receiver = self
            .user_repository
            .find_by_id(&request.receiver_id)
            .await?
            .ok_or(CoreError::UserNotFound {
                id: request.receiver_id,
            })?;

        let folder = self.resolve_folder(&receiver.id, request.folder_id).await?;

        // Watering without logging in is always anonymous.
        let anonymous = request.anonymous || sender_id.is_guest();

        // A message to yourself starts out read.
        let already_read = sender_id == receiver.id;

        let message = self
            .message_repository
            .insert(InsertMessageInput {
                user_id: receiver.id,
                sender_id,
                folder_id: folder.id,
                content: request.content,
                anonymous,
                already_read,
            })
            .await?;

        Ok(message.id)
    }

    async fn list_messages(
        &self,
        user_id: &UserId,
        folder_id: Option<FolderId>,
        pagination: &GetPaginated,
    ) -> Result<MessagePage, CoreError> {
        let folder = self.resolve_folder(user_id, folder_id).await?;

        let (messages, has_next) = self
            .message_repository
            .list_by_folder(user_id, &folder.id, pagination)
            .await?;

        let mut responses = Vec::with_capacity(messages.len());
        for message in &messages {
            if message.anonymous {
                responses.push(MessageBoxResponse::masked(message));
            } else {
                let sender = self
                    .user_repository
                    .find_by_id(&message.sender_id)
                    .await?
                    .ok_or(CoreError::UserNotFound {
                        id: message.sender_id,
                    })?;
                responses.push(MessageBoxResponse::of(message, &sender));
            }
        }

        Ok(MessagePage {
            messages: responses,
            has_next,
        })
    }

    async fn update_opening(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        // Reject before any flag is touched.
        if message_ids.len() > MAX_OPEN_MESSAGES {
            return Err(CoreError::InvalidInput {
                msg: format!("at most {MAX_OPEN_MESSAGES} messages can be opened at once"),
            });
        }

        self.message_repository
            .replace_opening(user_id, message_ids)
            .await
    }

    async fn delete_messages(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        self.message_repository
            .delete_all(user_id, message_ids)
            .await
    }

    async fn move_messages(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
        folder_id: &FolderId,
    ) -> Result<(), CoreError> {
        let folder = self
            .folder_repository
            .find_by_id(folder_id)
            .await?
            .ok_or(CoreError::TreeNotFound { id: *folder_id })?;

        self.message_repository
            .move_to_folder(user_id, message_ids, &folder.id)
            .await
    }

    async fn toggle_favorite(
        &self,
        user_id: &UserId,
        message_id: &MessageId,
    ) -> Result<(), CoreError> {
        let message = self
            .message_repository
            .find_by_id_and_user(message_id, user_id)
            .await?
            .ok_or(CoreError::MessageNotFound {
                id: *message_id,
                user_id: *user_id,
            })?;

        self.message_repository
            .update_favorite(user_id, message_id, !message.favorite)
            .await
    }

    async fn list_favorites(
        &self,
        user_id: &UserId,
        pagination: &GetPaginated,
    ) -> Result<MessagePage, CoreError> {
        let (messages, has_next) = self
            .message_repository
            .list_favorites(user_id, pagination)
            .await?;

        // Favorites always show the real sender, anonymous or not.
        let mut responses = Vec::with_capacity(messages.len());
        for message in &messages {
            let sender = self
                .user_repository
                .find_by_id(&message.sender_id)
                .await?
                .ok_or(CoreError::UserNotFound {
                    id: message.sender_id,
                })?;
            responses.push(MessageBoxResponse::of(message, &sender));
        }

        Ok(MessagePage {
            messages: responses,
            has_next,
        })
    }

    async fn mark_read(&self, user_id: &UserId, message_id: &MessageId) -> Result<(), CoreError> {
        let message = self
            .message_repository
            .find_by_id_and_user(message_id, user_id)
            .await?
            .ok_or(CoreError::MessageNotFound {
                id: *message_id,
                user_id: *user_id,
            })?;

        self.message_repository
            .mark_read(user_id, &message.id)
            .await
    }
}

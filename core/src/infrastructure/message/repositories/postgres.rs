use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::{
    common::{CoreError, GetPaginated, HasNextPage},
    folder::entities::FolderId,
    message::{
        entities::{InsertMessageInput, Message, MessageId},
        ports::MessageRepository,
    },
    user::entities::UserId,
};

const MESSAGE_COLUMNS: &str = "id, user_id, sender_id, folder_id, content, \
                               anonymous, already_read, opening, favorite, created_at";

#[derive(Clone)]
pub struct PostgresMessageRepository {
    pub(crate) pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn page_window(pagination: &GetPaginated) -> (i64, i64) {
        let limit = std::cmp::min(pagination.limit, 50) as i64;
        let offset = ((pagination.page.saturating_sub(1)) * pagination.limit) as i64;
        (limit, offset)
    }

    async fn begin(&self) -> Result<Transaction<'_, Postgres>, CoreError> {
        self.pool
            .begin()
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })
    }
}

impl MessageRepository for PostgresMessageRepository {
    async fn insert(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        let message = sqlx::query_as::<_, Message>(&format!(
            r#"
            INSERT INTO messages (user_id, sender_id, folder_id, content, anonymous, already_read)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(input.user_id.0)
        .bind(input.sender_id.0)
        .bind(input.folder_id.0)
        .bind(&input.content)
        .bind(input.anonymous)
        .bind(input.already_read)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        tracing::debug!(message_id = message.id.0, "message inserted");

        Ok(message)
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        let message = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE id = $1
            "#
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(message)
    }

    async fn find_by_id_and_user(
        &self,
        id: &MessageId,
        user_id: &UserId,
    ) -> Result<Option<Message>, CoreError> {
        let message = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id.0)
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(message)
    }

    async fn list_by_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, HasNextPage), CoreError> {
        let (limit, offset) = Self::page_window(pagination);

        // Fetch one row past the page; its presence is the has-next flag.
        let mut messages = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE user_id = $1 AND folder_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(user_id.0)
        .bind(folder_id.0)
        .bind(limit + 1)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        let has_next = messages.len() as i64 > limit;
        messages.truncate(limit as usize);

        Ok((messages, has_next))
    }

    async fn list_favorites(
        &self,
        user_id: &UserId,
        pagination: &GetPaginated,
    ) -> Result<(Vec<Message>, HasNextPage), CoreError> {
        let (limit, offset) = Self::page_window(pagination);

        let mut messages = sqlx::query_as::<_, Message>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE user_id = $1 AND favorite
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(user_id.0)
        .bind(limit + 1)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        let has_next = messages.len() as i64 > limit;
        messages.truncate(limit as usize);

        Ok((messages, has_next))
    }

    async fn replace_opening(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        let mut tx = self.begin().await?;

        sqlx::query("UPDATE messages SET opening = FALSE WHERE user_id = $1 AND opening")
            .bind(user_id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        // A miss drops the transaction, rolling the cleared flags back.
        for id in message_ids {
            let result =
                sqlx::query("UPDATE messages SET opening = TRUE WHERE id = $1 AND user_id = $2")
                    .bind(id.0)
                    .bind(user_id.0)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

            if result.rows_affected() == 0 {
                return Err(CoreError::MessageNotFound {
                    id: *id,
                    user_id: *user_id,
                });
            }
        }

        tx.commit()
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        tracing::debug!(user_id = user_id.0, count = message_ids.len(), "opened set replaced");

        Ok(())
    }

    async fn delete_all(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
    ) -> Result<(), CoreError> {
        let mut tx = self.begin().await?;

        for id in message_ids {
            let result = sqlx::query("DELETE FROM messages WHERE id = $1 AND user_id = $2")
                .bind(id.0)
                .bind(user_id.0)
                .execute(&mut *tx)
                .await
                .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

            if result.rows_affected() == 0 {
                return Err(CoreError::MessageNotFound {
                    id: *id,
                    user_id: *user_id,
                });
            }
        }

        tx.commit()
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(())
    }

    async fn move_to_folder(
        &self,
        user_id: &UserId,
        message_ids: &[MessageId],
        folder_id: &FolderId,
    ) -> Result<(), CoreError> {
        let mut tx = self.begin().await?;

        for id in message_ids {
            let result =
                sqlx::query("UPDATE messages SET folder_id = $1 WHERE id = $2 AND user_id = $3")
                    .bind(folder_id.0)
                    .bind(id.0)
                    .bind(user_id.0)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

            if result.rows_affected() == 0 {
                return Err(CoreError::MessageNotFound {
                    id: *id,
                    user_id: *user_id,
                });
            }
        }

        tx.commit()
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        Ok(())
    }

    async fn update_favorite(
        &self,
        user_id: &UserId,
        id: &MessageId,
        favorite: bool,
    ) -> Result<(), CoreError> {
        let result = sqlx::query("UPDATE messages SET favorite = $1 WHERE id = $2 AND user_id = $3")
            .bind(favorite)
            .bind(id.0)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::MessageNotFound {
                id: *id,
                user_id: *user_id,
            });
        }

        Ok(())
    }

    async fn mark_read(&self, user_id: &UserId, id: &MessageId) -> Result<(), CoreError> {
        let result =
            sqlx::query("UPDATE messages SET already_read = TRUE WHERE id = $1 AND user_id = $2")
                .bind(id.0)
                .bind(user_id.0)
                .execute(&self.pool)
                .await
                .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::MessageNotFound {
                id: *id,
                user_id: *user_id,
            });
        }

        Ok(())
    }
}

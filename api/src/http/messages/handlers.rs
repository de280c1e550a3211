use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use grove_core::domain::{
    common::GetPaginated,
    folder::entities::FolderId,
    message::{
        entities::{CreateMessageRequest, MessageId, MessagePage},
        ports::MessageService,
    },
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::http::server::{ApiError, AppState, Response, middleware::identity::UserIdentity};

#[derive(Debug, Deserialize)]
pub struct FolderFilter {
    pub folder_id: Option<i64>,
}

#[derive(Deserialize, ToSchema)]
pub struct MessageIdsRequest {
    pub message_ids: Vec<MessageId>,
}

#[derive(Deserialize, ToSchema)]
pub struct MoveMessagesRequest {
    pub message_ids: Vec<MessageId>,
    pub folder_id: FolderId,
}

#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created successfully", body = MessageId),
        (status = 400, description = "Bad request - Empty message content"),
        (status = 404, description = "Receiver or tree not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity, request))]
pub async fn create_message(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<Response<MessageId>, ApiError> {
    let id = state
        .service
        .create_message(user_identity.user_id, request)
        .await?;
    Ok(Response::created(id))
}

#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    params(
        ("folder_id" = Option<i64>, Query, description = "Tree to list; defaults to the user's default tree"),
        GetPaginated
    ),
    responses(
        (status = 200, description = "Message box page retrieved successfully", body = MessagePage),
        (status = 404, description = "Tree not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity, pagination))]
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Query(filter): Query<FolderFilter>,
    Query(pagination): Query<GetPaginated>,
) -> Result<Response<MessagePage>, ApiError> {
    let page = state
        .service
        .list_messages(
            &user_identity.user_id,
            filter.folder_id.map(FolderId),
            &pagination,
        )
        .await?;
    Ok(Response::ok(page))
}

#[utoipa::path(
    get,
    path = "/messages/favorites",
    tag = "messages",
    params(GetPaginated),
    responses(
        (status = 200, description = "Favorite messages page retrieved successfully", body = MessagePage),
        (status = 404, description = "A referenced sender no longer exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity, pagination))]
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Query(pagination): Query<GetPaginated>,
) -> Result<Response<MessagePage>, ApiError> {
    let page = state
        .service
        .list_favorites(&user_identity.user_id, &pagination)
        .await?;
    Ok(Response::ok(page))
}

#[utoipa::path(
    put,
    path = "/messages/opening",
    tag = "messages",
    request_body = MessageIdsRequest,
    responses(
        (status = 200, description = "Opened set replaced successfully"),
        (status = 400, description = "Bad request - More than 8 messages selected"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity, request))]
pub async fn update_opening(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Json(request): Json<MessageIdsRequest>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_opening(&user_identity.user_id, &request.message_ids)
        .await?;
    Ok(Response::ok(()))
}

#[utoipa::path(
    delete,
    path = "/messages",
    tag = "messages",
    request_body = MessageIdsRequest,
    responses(
        (status = 200, description = "Messages deleted successfully"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity, request))]
pub async fn delete_messages(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Json(request): Json<MessageIdsRequest>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_messages(&user_identity.user_id, &request.message_ids)
        .await?;
    Ok(Response::deleted(()))
}

#[utoipa::path(
    put,
    path = "/messages/folder",
    tag = "messages",
    request_body = MoveMessagesRequest,
    responses(
        (status = 200, description = "Messages moved successfully"),
        (status = 404, description = "Message or tree not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity, request))]
pub async fn move_messages(
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
    Json(request): Json<MoveMessagesRequest>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .move_messages(
            &user_identity.user_id,
            &request.message_ids,
            &request.folder_id,
        )
        .await?;
    Ok(Response::ok(()))
}

#[utoipa::path(
    put,
    path = "/messages/{id}/favorite",
    tag = "messages",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Favorite flag toggled successfully"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity))]
pub async fn toggle_favorite(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .toggle_favorite(&user_identity.user_id, &MessageId(id))
        .await?;
    Ok(Response::ok(()))
}

#[utoipa::path(
    put,
    path = "/messages/{id}/read",
    tag = "messages",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, user_identity))]
pub async fn mark_read(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user_identity): Extension<UserIdentity>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .mark_read(&user_identity.user_id, &MessageId(id))
        .await?;
    Ok(Response::ok(()))
}

use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::messages::handlers::{
        __path_create_message, __path_delete_messages, __path_list_favorites, __path_list_messages,
        __path_mark_read, __path_move_messages, __path_toggle_favorite, __path_update_opening,
        create_message, delete_messages, list_favorites, list_messages, mark_read, move_messages,
        toggle_favorite, update_opening,
    },
    http::server::AppState,
};

pub fn message_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_message, list_messages, delete_messages))
        .routes(routes!(list_favorites))
        .routes(routes!(update_opening))
        .routes(routes!(move_messages))
        .routes(routes!(toggle_favorite))
        .routes(routes!(mark_read))
}

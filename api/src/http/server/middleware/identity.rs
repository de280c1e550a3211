use axum::{extract::Request, middleware::Next, response::Response};
use grove_core::domain::user::entities::{GUEST_SENDER_ID, UserId};

/// Identity of the caller as asserted by the gateway in front of this
/// service. Authentication itself happens upstream; a request without the
/// header is treated as a guest watering a tree without logging in.
#[derive(Clone, Copy, Debug)]
pub struct UserIdentity {
    pub user_id: UserId,
}

pub const USER_ID_HEADER: &str = "x-user-id";

pub async fn identity_middleware(mut request: Request, next: Next) -> Response {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .map(UserId)
        .unwrap_or(GUEST_SENDER_ID);

    request.extensions_mut().insert(UserIdentity { user_id });

    next.run(request).await
}

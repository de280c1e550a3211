pub mod app_state;
pub mod middleware;
pub mod response;

pub use app_state::AppState;
pub use response::{ApiError, Response};

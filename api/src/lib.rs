pub mod app;
pub mod config;
pub mod http;

pub use app::App;
pub use config::Config;
pub use http::health::routes::health_routes;
pub use http::messages::routes::message_routes;
pub use http::server::{ApiError, AppState};

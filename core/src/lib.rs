pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{GroveService, create_repositories};
pub use domain::common::services::Service;
pub use infrastructure::folder::repositories::postgres::PostgresFolderRepository;
pub use infrastructure::health::repositories::postgres::PostgresHealthRepository;
pub use infrastructure::message::repositories::postgres::PostgresMessageRepository;
pub use infrastructure::user::repositories::postgres::PostgresUserRepository;

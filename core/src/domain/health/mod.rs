pub mod port;
pub mod services;

pub mod common;
pub mod folder;
pub mod health;
pub mod message;
pub mod user;

#[cfg(test)]
mod test;

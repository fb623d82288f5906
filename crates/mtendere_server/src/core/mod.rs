pub mod analytics;
pub mod auth;
pub mod error;
pub mod health;
pub mod public;
pub mod resources;
pub mod roles;
pub mod router;
pub mod setup;
pub mod state;
pub mod users;

#[cfg(test)]
pub mod test_utils;

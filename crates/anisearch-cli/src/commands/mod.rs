pub mod auth;
pub mod prompt;
pub mod search;

//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: Session, auth state and the login outcome sentinel
//! - `client`: Remote authentication service trait and its wire payloads
//! - `listener`: Notification hook fired when a session ends
//!
//! # Usage
//!
//! ```ignore
//! use anisearch_core::auth::{AuthState, LoginOutcome, RemoteAuthClient, Session};
//! ```

mod client;
mod listener;
mod model;

// Re-export public API
pub use client::{
    LoginResponse, RegisterResponse, RegisteredUser, RemoteAuthClient, UpdatePasswordResponse,
    UserProfileResponse,
};
pub use listener::LogoutListener;
pub use model::{AuthState, LoginOutcome, Session};

//! Session-end notification hook.

use async_trait::async_trait;

/// Receives a notification when the user logs out.
///
/// The auth store is handed its listeners at construction time. Inside
/// `logout` it calls [`LogoutListener::on_logout`] on each of them *before*
/// publishing the cleared session, so no observer ever sees a logged-out user
/// next to per-user data. [`LogoutListener::after_logout`] is awaited once the
/// cleared session is published; durable writes belong there.
///
/// Implementations must not fail; there is no rollback of the logout.
#[async_trait]
pub trait LogoutListener: Send + Sync {
    /// Drops in-memory per-user state. Must not block.
    fn on_logout(&self);

    /// Brings durable storage in line with the reset state.
    async fn after_logout(&self) {}
}

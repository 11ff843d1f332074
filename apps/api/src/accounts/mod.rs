// Accounts: registration wizard, name-capture login, and the current-user session.
// Nothing here authenticates; the store only remembers who said they were logged in.

pub mod handlers;
pub mod registration;
pub mod session;

/// Store key for the registered-users list.
pub const USERS_KEY: &str = "users";
/// Store key for the logged-in user.
pub const CURRENT_USER_KEY: &str = "currentUser";

//! Constant strings shared across handlers.

pub const MSG_USER_NOT_FOUND: &str = "User not found";

// Placeholder bodies for endpoints that never reached the repository.
pub const STUB_AUTH_BY_ID: &str = "Auth ID";
pub const STUB_USER_DATA_BY_ID: &str = "user id";

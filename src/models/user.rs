//! User identity and login credentials.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/api/auth/me`.
///
/// Opaque beyond these fields; the backend may send more, which we ignore.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Username/password pair for login and registration.
///
/// Transient: serialized into the request body and dropped, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

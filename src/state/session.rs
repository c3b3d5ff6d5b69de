// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store: token lifecycle and resolved identity.
//!
//! Invariant: `identity` is `Some` exactly when the last verification of
//! `token` against the backend succeeded. Every path that changes one keeps
//! the other in step.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Credentials, User};
use crate::persist::TokenFile;

/// Owns the current authentication identity and the persisted token.
#[derive(Debug)]
pub struct SessionStore {
    token_file: TokenFile,
    token: Option<String>,
    identity: Option<User>,
}

impl SessionStore {
    pub fn new(token_file: TokenFile) -> Self {
        Self {
            token_file,
            token: None,
            identity: None,
        }
    }

    /// The resolved user, if the current token verified successfully.
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    /// The verified token backing the current identity.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attempt silent login from the persisted token.
    ///
    /// No-op if no token is persisted. A definitive rejection from the
    /// backend evicts the persisted token so restarts stop re-verifying a
    /// dead credential; a transport or decode failure leaves the file alone.
    /// Either way the outcome collapses to "no session" rather than an
    /// error, so callers only see persistence I/O failures.
    pub async fn restore(&mut self, api: &ApiClient) -> Result<()> {
        let Some(token) = self.token_file.load() else {
            return Ok(());
        };

        match api.me(&token).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "Session restored");
                self.token = Some(token);
                self.identity = Some(user);
            }
            Err(e) if e.is_rejection() => {
                tracing::info!(error = %e, "Stored token rejected, evicting");
                self.token_file.clear()?;
                self.token = None;
                self.identity = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token verification unreachable, no session");
                self.token = None;
                self.identity = None;
            }
        }
        Ok(())
    }

    /// Exchange credentials for a token, persist it, and re-run [`restore`]
    /// to resolve the identity.
    ///
    /// Routing through `restore` keeps a single source of truth for "is
    /// this token valid". On failure nothing changes and the error is
    /// surfaced for user display.
    ///
    /// [`restore`]: SessionStore::restore
    pub async fn login(&mut self, api: &ApiClient, credentials: &Credentials) -> Result<()> {
        let issued = api.login(credentials).await?;
        self.token_file.save(&issued.token)?;
        self.restore(api).await
    }

    /// Create an account. Never mutates session state: a successful
    /// registration does not imply a session.
    pub async fn register(&self, api: &ApiClient, credentials: &Credentials) -> Result<()> {
        api.register(credentials).await
    }

    /// Clear the persisted token and the identity. Idempotent.
    pub fn logout(&mut self) -> Result<()> {
        self.token_file.clear()?;
        self.token = None;
        self.identity = None;
        Ok(())
    }
}

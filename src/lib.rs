// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! favmark: a headless client for a products-and-favorites store API.
//!
//! This crate owns the client side of the store: the authentication session
//! (with a token persisted across restarts), the product catalog, and the
//! user's favorites, kept in sync with the backend one request at a time.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod persist;
pub mod state;

use api::ApiClient;
use config::Config;
use error::Result;
use models::Credentials;
use persist::TokenFile;
use state::{FavoritesSet, ProductCatalog, SessionStore};

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Product is now favorited, under this favorite record id.
    Added(i64),
    /// Product is no longer favorited; this record id was removed.
    Removed(i64),
}

/// Top-level controller owning all client state.
///
/// There are exactly two cross-store orderings and both live here as
/// sequential awaits: a login re-verifies its own token before anything
/// else, and any identity change is followed by a favorites reload.
pub struct App {
    pub api: ApiClient,
    pub session: SessionStore,
    pub catalog: ProductCatalog,
    pub favorites: FavoritesSet,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            api: ApiClient::new(config.api_url.clone()),
            session: SessionStore::new(TokenFile::new(config.token_path.clone())),
            catalog: ProductCatalog::default(),
            favorites: FavoritesSet::default(),
        }
    }

    /// Startup sequence: silent login from the persisted token, then the
    /// catalog, then favorites for whatever identity resolved.
    pub async fn init(&mut self) -> Result<()> {
        self.session.restore(&self.api).await?;
        self.catalog.load(&self.api).await;
        self.favorites.reload(&self.api, &self.session).await;
        Ok(())
    }

    /// Log in and bring favorites in line with the new identity.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        self.session.login(&self.api, credentials).await?;
        self.favorites.reload(&self.api, &self.session).await;
        Ok(())
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        self.session.register(&self.api, credentials).await
    }

    /// End the session. The identity becomes absent, so the favorites
    /// reload resets to empty without a request.
    pub async fn logout(&mut self) -> Result<()> {
        self.session.logout()?;
        self.favorites.reload(&self.api, &self.session).await;
        Ok(())
    }

    /// Flip a product's favorite status, deciding add vs remove from the
    /// current membership index.
    pub async fn toggle_favorite(&mut self, product_id: i64) -> Result<Toggle> {
        match self.favorites.get(product_id) {
            Some(favorite) => {
                let favorite_id = favorite.id;
                self.favorites
                    .remove(&self.api, &self.session, favorite_id)
                    .await?;
                Ok(Toggle::Removed(favorite_id))
            }
            None => {
                let favorite = self
                    .favorites
                    .add(&self.api, &self.session, product_id)
                    .await?;
                Ok(Toggle::Added(favorite.id))
            }
        }
    }
}

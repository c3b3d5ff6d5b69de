// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites set: the current user's favorite records.
//!
//! Membership is an indexed lookup from product id to favorite record, not
//! a stored flag on products. Local state is mutated only after the server
//! confirms an operation; a failed request leaves the set untouched.
//!
//! Outside of an in-flight request the local set equals the server's set,
//! assuming no failed operations. `&mut self` on every operation means a
//! reload and a mutation can never overlap within one client.

use std::collections::HashMap;

use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{Favorite, User};
use crate::state::SessionStore;

/// The current user's favorites, indexed by product id.
#[derive(Debug, Default)]
pub struct FavoritesSet {
    by_product: HashMap<i64, Favorite>,
}

impl FavoritesSet {
    /// The favorite record for a product, if the product is favorited.
    pub fn get(&self, product_id: i64) -> Option<&Favorite> {
        self.by_product.get(&product_id)
    }

    pub fn is_favorite(&self, product_id: i64) -> bool {
        self.by_product.contains_key(&product_id)
    }

    pub fn len(&self) -> usize {
        self.by_product.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_product.is_empty()
    }

    /// Synchronize with the session's identity.
    ///
    /// No identity: reset to empty without issuing a request. Identity
    /// present: fetch that user's favorites and replace the set on success;
    /// on failure keep the previous set (stale but present).
    pub async fn reload(&mut self, api: &ApiClient, session: &SessionStore) {
        let Some((token, user)) = authenticated(session) else {
            self.by_product.clear();
            return;
        };

        match api.favorites(token, user.id).await {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "Favorites reloaded");
                self.replace(favorites);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Favorites reload failed, keeping previous set");
            }
        }
    }

    /// Mark a product as favorite.
    ///
    /// The record the server returns is applied locally only after the
    /// request succeeds. On failure the set is unchanged and the error is
    /// logged and returned.
    pub async fn add(
        &mut self,
        api: &ApiClient,
        session: &SessionStore,
        product_id: i64,
    ) -> Result<&Favorite> {
        let Some((token, user)) = authenticated(session) else {
            return Err(ClientError::Unauthorized);
        };

        match api.add_favorite(token, user.id, product_id).await {
            Ok(favorite) => Ok(self.apply_add(favorite)),
            Err(e) => {
                tracing::warn!(product_id, error = %e, "Add favorite failed");
                Err(e)
            }
        }
    }

    /// Unmark a favorite by its record id.
    pub async fn remove(
        &mut self,
        api: &ApiClient,
        session: &SessionStore,
        favorite_id: i64,
    ) -> Result<()> {
        let Some((token, user)) = authenticated(session) else {
            return Err(ClientError::Unauthorized);
        };

        match api.remove_favorite(token, user.id, favorite_id).await {
            Ok(()) => {
                self.apply_remove(favorite_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(favorite_id, error = %e, "Remove favorite failed");
                Err(e)
            }
        }
    }

    /// Replace the whole set with a server snapshot.
    fn replace(&mut self, favorites: Vec<Favorite>) {
        self.by_product = favorites.into_iter().map(|f| (f.product_id, f)).collect();
    }

    /// Apply a confirmed create.
    fn apply_add(&mut self, favorite: Favorite) -> &Favorite {
        let product_id = favorite.product_id;
        self.by_product.insert(product_id, favorite);
        &self.by_product[&product_id]
    }

    /// Apply a confirmed delete, dropping the entry with that record id.
    fn apply_remove(&mut self, favorite_id: i64) {
        self.by_product.retain(|_, f| f.id != favorite_id);
    }
}

/// Token and identity together, or None when either is absent.
fn authenticated(session: &SessionStore) -> Option<(&str, &User)> {
    Some((session.token()?, session.identity()?))
}

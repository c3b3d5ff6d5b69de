// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Product catalog: the full product list, fetched once per session.

use crate::api::ApiClient;
use crate::models::Product;

/// Immutable-per-session list of all products.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Fetch the full product list. Unauthenticated, no pagination.
    ///
    /// Failure leaves the catalog empty; there is no retry.
    pub async fn load(&mut self, api: &ApiClient) {
        match api.products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Product catalog loaded");
                self.products = products;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Product catalog load failed, catalog empty");
                self.products = Vec::new();
            }
        }
    }
}

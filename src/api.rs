// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store API client.
//!
//! Handles:
//! - Login, registration, and token verification
//! - Product listing
//! - Per-user favorites listing and mutation
//!
//! One method per endpoint; the exact paths and methods here are the
//! compatibility surface with the backend.

use crate::error::{ClientError, Result};
use crate::models::{Credentials, Favorite, Product, User};
use serde::Deserialize;

/// Store API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        let response = self.http.post(&url).json(credentials).send().await?;
        self.check_response_json(response).await
    }

    /// Create a new account.
    ///
    /// The response body is unspecified, so only the status is inspected.
    /// A successful registration does not imply a session.
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        let url = format!("{}/api/auth/register", self.base_url);
        let response = self.http.post(&url).json(credentials).send().await?;
        self.check_response(response).await
    }

    /// Resolve a token to the user it identifies.
    pub async fn me(&self, token: &str) -> Result<User> {
        let url = format!("{}/api/auth/me", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// List all products. Unauthenticated.
    pub async fn products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.http.get(&url).send().await?;
        self.check_response_json(response).await
    }

    /// List a user's favorites.
    pub async fn favorites(&self, token: &str, user_id: i64) -> Result<Vec<Favorite>> {
        let url = format!("{}/api/users/{}/favorites", self.base_url, user_id);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Create a favorite; returns the record created by the server.
    pub async fn add_favorite(
        &self,
        token: &str,
        user_id: i64,
        product_id: i64,
    ) -> Result<Favorite> {
        let url = format!("{}/api/users/{}/favorites", self.base_url, user_id);
        let body = serde_json::json!({ "product_id": product_id });
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(&body)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Delete a favorite by its record id. No meaningful response body.
    pub async fn remove_favorite(
        &self,
        token: &str,
        user_id: i64,
        favorite_id: i64,
    ) -> Result<()> {
        let url = format!(
            "{}/api/users/{}/favorites/{}",
            self.base_url, user_id, favorite_id
        );
        let response = self
            .http
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Check response status and return an error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 401 {
            return Err(ClientError::Unauthorized);
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 {
                return Err(ClientError::Unauthorized);
            }

            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))
    }
}

/// Login response from the backend.
///
/// The backend may send more fields alongside the token; they are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

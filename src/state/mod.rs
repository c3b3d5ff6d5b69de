// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side state, split by domain.
//!
//! Each store owns one slice of view state and synchronizes it with the
//! backend through the [`ApiClient`](crate::api::ApiClient). Rendering is
//! a pure function of the three stores.

pub mod catalog;
pub mod favorites;
pub mod session;

pub use catalog::ProductCatalog;
pub use favorites::FavoritesSet;
pub use session::SessionStore;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the client.

pub mod favorite;
pub mod product;
pub mod user;

pub use favorite::Favorite;
pub use product::Product;
pub use user::{Credentials, User};

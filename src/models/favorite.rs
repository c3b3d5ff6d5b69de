//! Favorite model.

use serde::Deserialize;

/// A join record linking the current user to a product they marked.
///
/// Keyed by `id` for removal and by `product_id` for membership lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub product_id: i64,
}

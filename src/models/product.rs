//! Product model.

use serde::Deserialize;

/// A product in the store catalog.
///
/// Immutable from the client's perspective for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
}

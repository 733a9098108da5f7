//! Frontend Models
//!
//! Data structures shared by the store, the catalog and the sidebar.

use serde::{Deserialize, Serialize};

/// Stable character identifier
pub type CharacterId = u32;

/// Character data structure (matches the seed/API shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Avatar URI
    pub image: String,
}

#[cfg(test)]
impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}

//! Favorites View
//!
//! Derives the liked subset of the catalog and the sidebar state built from it.

use std::collections::HashSet;

use leptos::prelude::*;
use crate::models::{Character, CharacterId};
use crate::store::{toggle_like, AppStateStoreFields, AppStore};

/// Shown instead of the list when nothing is liked
pub const EMPTY_FAVORITES_LABEL: &str = "Aucun favori";

/// Characters whose id is in `liked_ids`, in catalog order.
///
/// Liked ids with no matching character are skipped.
pub fn compute_favorites(items: &[Character], liked_ids: &HashSet<CharacterId>) -> Vec<Character> {
    if liked_ids.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|character| liked_ids.contains(&character.id))
        .cloned()
        .collect()
}

/// Remove a favorite through `toggle_like`.
///
/// A stale click for an id that is no longer liked is ignored, so this never
/// takes the add branch.
pub fn request_unlike(store: &AppStore, id: CharacterId) {
    if !store.liked_ids().with_untracked(|liked| liked.contains(&id)) {
        log::debug!("[FavoritesSidebar] ignoring unlike for id={}, not liked", id);
        return;
    }
    toggle_like(store, id);
}

/// Sidebar heading with the favorite count
pub fn favorites_label(count: usize) -> String {
    format!("Mes Favoris ({})", count)
}

/// One row of the sidebar: key plus display fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
}

impl From<Character> for FavoriteEntry {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            image: character.image,
        }
    }
}

/// What the sidebar shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarState {
    Empty,
    Populated(Vec<FavoriteEntry>),
}

impl SidebarState {
    pub fn from_favorites(favorites: Vec<Character>) -> Self {
        if favorites.is_empty() {
            SidebarState::Empty
        } else {
            SidebarState::Populated(favorites.into_iter().map(FavoriteEntry::from).collect())
        }
    }

    pub fn count(&self) -> usize {
        match self {
            SidebarState::Empty => 0,
            SidebarState::Populated(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SidebarState::Empty)
    }

    pub fn entries(&self) -> Vec<FavoriteEntry> {
        match self {
            SidebarState::Empty => Vec::new(),
            SidebarState::Populated(entries) => entries.clone(),
        }
    }
}

/// Reactive favorites, recomputed whenever `characters` or `liked_ids` change
pub fn use_favorites(store: AppStore) -> Memo<Vec<Character>> {
    Memo::new(move |_| {
        store.characters().with(|characters| {
            store
                .liked_ids()
                .with(|liked_ids| compute_favorites(characters, liked_ids))
        })
    })
}

/// Reactive sidebar state on top of [`use_favorites`]
pub fn use_sidebar_state(store: AppStore) -> Memo<SidebarState> {
    let favorites = use_favorites(store);
    Memo::new(move |_| SidebarState::from_favorites(favorites.get()))
}

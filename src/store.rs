//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Character, CharacterId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All characters, in catalog order
    pub characters: Vec<Character>,
    /// Ids currently marked as favorites (may contain ids with no character)
    pub liked_ids: HashSet<CharacterId>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Create the app store and provide it to all children
pub fn provide_app_store(state: AppState) -> AppStore {
    let store = Store::new(state);
    provide_context(store);
    store
}

// ========================
// Store Selectors
// ========================

/// Whether a character is currently liked
pub fn is_liked(store: &AppStore, id: CharacterId) -> bool {
    store.liked_ids().read().contains(&id)
}

// ========================
// Store Mutations
// ========================

/// Flip membership of `id` in the liked set.
///
/// Adds the id when absent, removes it when present. Returns `true` when the
/// id is liked after the call.
pub fn toggle_like(store: &AppStore, id: CharacterId) -> bool {
    let now_liked = {
        let field = store.liked_ids();
        let mut liked = field.write();
        if liked.remove(&id) {
            false
        } else {
            liked.insert(id);
            true
        }
    };
    log::debug!("[Store] toggle_like id={} liked={}", id, now_liked);
    now_liked
}

/// Replace the character catalog. Liked ids are kept as-is.
pub fn set_characters(store: &AppStore, characters: Vec<Character>) {
    log::info!("[Store] Loaded {} characters", characters.len());
    *store.characters().write() = characters;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> AppStore {
        Store::new(AppState {
            characters: vec![
                Character::new(1, "Rick", "rick.jpeg"),
                Character::new(2, "Morty", "morty.jpeg"),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_toggle_like_adds_then_removes() {
        let owner = Owner::new();
        owner.set();
        let store = make_store();

        assert!(toggle_like(&store, 2));
        assert!(store.liked_ids().read_untracked().contains(&2));
        assert_eq!(store.liked_ids().read_untracked().len(), 1);

        assert!(!toggle_like(&store, 2));
        assert!(!store.liked_ids().read_untracked().contains(&2));
        assert!(store.liked_ids().read_untracked().is_empty());
    }

    #[test]
    fn test_toggle_like_reports_membership_each_call() {
        let owner = Owner::new();
        owner.set();
        let store = make_store();

        let results: Vec<bool> = (0..4).map(|_| toggle_like(&store, 1)).collect();

        assert_eq!(results, vec![true, false, true, false]);
        assert!(!is_liked(&store, 1));
    }

    #[test]
    fn test_toggle_like_accepts_unknown_id() {
        let owner = Owner::new();
        owner.set();
        let store = make_store();

        assert!(toggle_like(&store, 42));
        assert!(is_liked(&store, 42));
        assert!(!is_liked(&store, 1));
    }

    #[test]
    fn test_set_characters_keeps_liked_ids() {
        let owner = Owner::new();
        owner.set();
        let store = make_store();
        toggle_like(&store, 1);

        set_characters(&store, vec![Character::new(3, "Summer", "summer.jpeg")]);

        assert_eq!(store.characters().read_untracked().len(), 1);
        assert!(is_liked(&store, 1));
    }

    #[test]
    fn test_provide_app_store_is_reachable_from_context() {
        let owner = Owner::new();
        owner.set();
        let provided = provide_app_store(AppState::new());
        toggle_like(&provided, 7);

        let store = use_app_store();
        assert!(is_liked(&store, 7));
    }
}

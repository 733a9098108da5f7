//! UI Components
//!
//! Reusable Leptos components.

mod character_list;
mod favorites_sidebar;

pub use character_list::CharacterList;
pub use favorites_sidebar::FavoritesSidebar;

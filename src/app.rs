//! Character Favorites App
//!
//! Main application component: character catalog with the favorites sidebar.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{CharacterList, FavoritesSidebar};
use crate::store::{provide_app_store, set_characters, AppState, AppStore};

/// Load the bundled catalog into the store. A bad seed leaves the catalog empty.
fn seed_store(store: &AppStore) {
    match catalog::seed_characters() {
        Ok(characters) => set_characters(store, characters),
        Err(e) => log::error!("[App] Failed to load seed characters: {}", e),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = provide_app_store(AppState::new());
    seed_store(&store);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Characters"</h1>
                <CharacterList />
            </main>

            <FavoritesSidebar store=store />
        </div>
    }
}

//! Character List Component
//!
//! Catalog of all characters with a like toggle per row.

use leptos::prelude::*;
use crate::models::Character;
use crate::favorites::use_favorites;
use crate::store::{is_liked, toggle_like, use_app_store, AppStateStoreFields};

#[component]
pub fn CharacterList() -> impl IntoView {
    let store = use_app_store();
    let favorites = use_favorites(store);

    view! {
        <p class="liked-count">{move || format!("{} liked", favorites.with(|f| f.len()))}</p>
        <ul class="character-list">
            <For
                each=move || store.characters().get()
                key=|character| character.id
                children=move |character: Character| {
                    let id = character.id;
                    let liked = move || is_liked(&store, id);

                    view! {
                        <li class=move || if liked() { "character-item liked" } else { "character-item" }>
                            <img src=character.image alt=character.name.clone() />
                            <span class="character-name">{character.name}</span>
                            <button
                                class="like-btn"
                                on:click=move |_| {
                                    toggle_like(&store, id);
                                }
                            >
                                {move || if liked() { "❤" } else { "♡" }}
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}

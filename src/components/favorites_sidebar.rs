use leptos::prelude::*;
use crate::favorites::{
    favorites_label, request_unlike, use_sidebar_state, FavoriteEntry, EMPTY_FAVORITES_LABEL,
};
use crate::models::CharacterId;
use crate::store::{use_app_store, AppStore};

/// Favorites sidebar
///
/// Lists liked characters with a remove button. Uses the injected `store`
/// when given, otherwise the one from context.
#[component]
pub fn FavoritesSidebar(#[prop(optional)] store: Option<AppStore>) -> impl IntoView {
    let store = store.unwrap_or_else(use_app_store);
    let state = use_sidebar_state(store);

    let remove_favorite = move |id: CharacterId, e: web_sys::MouseEvent| {
        e.stop_propagation();
        request_unlike(&store, id);
    };

    view! {
        <div class="favorites-sidebar">
            <h2>{move || favorites_label(state.with(|s| s.count()))}</h2>

            <Show
                when=move || !state.with(|s| s.is_empty())
                fallback=|| view! { <p class="favorites-empty">{EMPTY_FAVORITES_LABEL}</p> }
            >
                <For
                    each=move || state.with(|s| s.entries())
                    key=|entry| entry.id
                    children=move |entry: FavoriteEntry| {
                        let id = entry.id;
                        view! {
                            <div class="favorite-item">
                                <img src=entry.image alt=entry.name.clone() />
                                <span>{entry.name}</span>
                                <button
                                    class="favorite-remove-btn"
                                    on:click=move |e| remove_favorite(id, e)
                                >
                                    "❌"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}

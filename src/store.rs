//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};
use crate::state::{accept_listing, image_is_current, sync_images, Fence, ImageState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos as last listed by the backend
    pub todos: Vec<Todo>,
    /// Image slot per listed todo
    pub images: HashMap<TodoId, ImageState>,
    /// Generations of list reloads (read untracked, never rendered)
    pub fence: Fence,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a list reload and return its generation
pub fn store_issue_reload(store: &AppStore) -> u64 {
    store.fence().write_untracked().issue()
}

/// Apply a finished list reload; returns false if it was dropped
pub fn store_apply_list(store: &AppStore, generation: u64, listing: Option<Vec<Todo>>) -> bool {
    let accepted = accept_listing(&mut store.fence().write_untracked(), generation, listing);
    let Some(todos) = accepted else {
        return false;
    };
    sync_images(&mut store.images().write(), &todos);
    store.todos().set(todos);
    true
}

/// Resolve one image slot if its lookup belongs to the list on screen
pub fn store_apply_image(store: &AppStore, generation: u64, id: &TodoId, image: ImageState) -> bool {
    if !image_is_current(&store.fence().read_untracked(), generation) {
        return false;
    }
    match store.images().write().get_mut(id) {
        Some(slot) => {
            *slot = image;
            true
        }
        None => false,
    }
}

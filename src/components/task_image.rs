//! Task Image Component
//!
//! Renders a todo's image slot from the store; lookups write the store, not the DOM.

use leptos::prelude::*;

use crate::models::TodoId;
use crate::state::ImageState;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskImage(todo_id: TodoId) -> impl IntoView {
    let store = use_app_store();

    let key = todo_id.clone();
    let image = Memo::new(move |_| {
        store
            .images()
            .with(|images| images.get(&key).cloned())
            .unwrap_or(ImageState::Loading)
    });

    let status_id = format!("{}-loading", todo_id);
    let img_id = format!("{}-img", todo_id);

    view! {
        {move || image.get().status_text().map(|text| view! {
            <span id=status_id.clone() class="image-status">{text}</span>
        })}
        <img id=img_id src=move || image.get().url().map(str::to_string) />
    }
}

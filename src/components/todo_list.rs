//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// All todos from the last applied listing
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                key=|todo| (todo.id.clone(), todo.title.clone(), todo.date.clone())
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}

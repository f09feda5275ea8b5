//! Todo Form Component
//!
//! Title, due date and dependency inputs for creating todos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::commands;
use crate::context::AppContext;
use crate::state::{date_input_value, prepare_new_todo, today};

/// Dependency choices (collected and sent, never interpreted)
const DEPENDENCY_OPTIONS: &[(&str, &str)] = &[
    ("option1", "Option 1"),
    ("option2", "Option 2"),
    ("option3", "Option 3"),
];

fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());
    let (new_date, set_new_date) = signal(date_input_value(Some(today())));
    let (depends, set_depends) = signal(Vec::<String>::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(todo) = prepare_new_todo(&new_title.get(), &new_date.get(), &depends.get()) else {
            return;
        };
        let config = ctx.config();

        spawn_local(async move {
            commands::create_todo(&config, &todo).await;
            set_new_title.set(String::new());
            set_new_date.set(date_input_value(Some(today())));
            set_depends.set(Vec::new());
            ctx.reload();
        });
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                class="title-input"
                placeholder="Add a new todo"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || new_date.get()
                on:input=move |ev| set_new_date.set(event_target_value(&ev))
            />
            <select
                multiple
                id="dependency-select"
                on:change=move |ev| set_depends.set(selected_values(&event_target::<HtmlSelectElement>(&ev)))
            >
                {DEPENDENCY_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <option
                            value=value
                            prop:selected=move || depends.get().iter().any(|d| d == value)
                        >
                            {*label}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}

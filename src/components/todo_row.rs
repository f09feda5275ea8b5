//! Todo Row Component
//!
//! One listed todo: title, due date, image slot and delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TaskImage;
use crate::context::AppContext;
use crate::models::Todo;
use crate::state::{is_overdue, locale_date};

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let due = todo.due_date();
    let today = ctx.today;
    let date_class = move || if is_overdue(due, today.get()) { "todo-date overdue" } else { "todo-date" };
    let date_text = due.map(locale_date).unwrap_or_default();
    let id = todo.id.clone();

    let delete = move |_: web_sys::MouseEvent| {
        let id = id.clone();
        let config = ctx.config();
        spawn_local(async move {
            commands::delete_todo(&config, &id).await;
            ctx.reload();
        });
    };

    view! {
        <li class="todo-row">
            <span class="todo-title">{todo.title}</span>
            <span class=date_class>{date_text}</span>
            <TaskImage todo_id=todo.id />
            <button class="delete-btn" on:click=delete>
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M6 18L18 6M6 6l12 12"
                    />
                </svg>
            </button>
        </li>
    }
}

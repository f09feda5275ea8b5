//! Todo Board Frontend App
//!
//! Root component: owns the store, loads todos and drives image lookups.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::state::today;
use crate::store::{store_apply_image, store_apply_list, store_issue_reload, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_day, set_current_day) = signal(today());
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), current_day, AppConfig::from_build_env());

    // Keep the overdue highlighting in step with the calendar day
    Interval::new(60_000, move || {
        let now = today();
        if current_day.get_untracked() != now {
            set_current_day.set(now);
        }
    })
    .forget();

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let generation = store_issue_reload(&store);
        web_sys::console::log_1(&format!("[APP] Loading todos, trigger={}, generation={}", trigger, generation).into());
        let config = ctx.config();
        spawn_local(async move {
            let listing = commands::list_todos(&config).await;
            let count = listing.as_ref().map(Vec::len);
            if store_apply_list(&store, generation, listing) {
                web_sys::console::log_1(&format!("[APP] Loaded {} todos", count.unwrap_or_default()).into());
            }
        });
    });

    // One image lookup per listed todo, every time the list is replaced
    Effect::new(move |_| {
        let todos = store.todos().get();
        let generation = store.fence().read_untracked().applied();
        let image_config = ctx.config().image;
        for todo in todos {
            let image_config = image_config.clone();
            spawn_local(async move {
                let image = commands::lookup_image(&image_config, &todo.title).await;
                if !store_apply_image(&store, generation, &todo.id, image) {
                    web_sys::console::log_1(&format!("[IMAGES] Dropped stale image for {}", todo.id).into());
                }
            });
        }
    });

    view! {
        <div class="page">
            <div class="board">
                <h1>"Things To Do App"</h1>

                <TodoForm />

                <TodoList />
            </div>
        </div>
    }
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Local calendar day, refreshed by the app while it runs
    pub today: ReadSignal<NaiveDate>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        today: ReadSignal<NaiveDate>,
        config: AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            today,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

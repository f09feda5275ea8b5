//! View State Rules
//!
//! Pure rules behind the reactive store: request fencing, per-task image
//! states, overdue highlighting and new-todo input preparation.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{parse_date, NewTodo, PhotoSearch, Todo, TodoId};

// ========================
// Request fencing
// ========================

/// Generation counter for list reloads.
///
/// Each reload gets a fresh generation from [`Fence::issue`]; its result is
/// applied only if nothing newer has been applied since.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fence {
    issued: u64,
    applied: u64,
}

impl Fence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Mark `generation` as applied if it is newer than the current one
    pub fn accept(&mut self, generation: u64) -> bool {
        if generation <= self.applied {
            return false;
        }
        self.applied = generation;
        true
    }

    /// Generation of the list currently on screen (0 before the first load)
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

/// Decide what a finished list reload does to the view.
///
/// Returns the list to show, or `None` when the fetch failed or was overtaken
/// by a newer reload. A failed fetch never advances the fence.
pub fn accept_listing(
    fence: &mut Fence,
    generation: u64,
    listing: Option<Vec<Todo>>,
) -> Option<Vec<Todo>> {
    let todos = listing?;
    fence.accept(generation).then_some(todos)
}

// ========================
// Images
// ========================

/// Image slot of one task row
#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    Loading,
    Loaded(String),
    /// Search succeeded but returned no photos
    NotFound,
    Failed,
}

impl ImageState {
    pub fn from_search(found: &PhotoSearch) -> Self {
        match found.first_thumbnail() {
            Some(url) => ImageState::Loaded(url.to_string()),
            None => ImageState::NotFound,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageState::Loaded(url) => Some(url.as_str()),
            _ => None,
        }
    }

    /// Text shown in place of the image, if any
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            ImageState::Loading => Some("loading"),
            ImageState::Loaded(_) => None,
            ImageState::NotFound => Some("no image found"),
            ImageState::Failed => Some("image unavailable"),
        }
    }
}

/// Align the image map with a freshly applied list.
///
/// Vanished ids are dropped, new ids start loading, known ids keep their
/// current image until the next lookup for them resolves.
pub fn sync_images(images: &mut HashMap<TodoId, ImageState>, todos: &[Todo]) {
    images.retain(|id, _| todos.iter().any(|t| &t.id == id));
    for todo in todos {
        images.entry(todo.id.clone()).or_insert(ImageState::Loading);
    }
}

/// An image lookup result counts only for the list generation that started it
pub fn image_is_current(fence: &Fence, generation: u64) -> bool {
    fence.applied() == generation
}

// ========================
// Dates
// ========================

/// `en-US` short date, as `toLocaleDateString("en-us")` prints it
pub fn locale_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Overdue when today's formatted date sorts after the task's formatted date.
///
/// The comparison is on the `M/D/YYYY` strings, not on calendar order, and a
/// task without a date is never overdue.
pub fn is_overdue(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    match due {
        Some(due) => locale_date(today) > locale_date(due),
        None => false,
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Value for an `<input type="date">`
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

// ========================
// New todo input
// ========================

/// Build the create request from raw form values.
///
/// Returns `None` when the title is blank after trimming; the title itself is
/// sent as typed.
pub fn prepare_new_todo(title: &str, date: &str, depends: &[String]) -> Option<NewTodo> {
    if title.trim().is_empty() {
        return None;
    }
    Some(NewTodo::new(title.to_string(), parse_date(date), depends.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_todo(id: &str, title: &str, date: Option<&str>) -> Todo {
        Todo {
            id: TodoId::from(id),
            title: title.to_string(),
            date: date.map(str::to_string),
            depends: vec![],
        }
    }

    #[test]
    fn test_fence_discards_stale_reload() {
        let mut fence = Fence::default();
        let first = fence.issue();
        let second = fence.issue();

        // Second reload resolves first, then the slower first one arrives
        assert!(fence.accept(second));
        assert!(!fence.accept(first));
        assert_eq!(fence.applied(), second);
    }

    #[test]
    fn test_failed_listing_keeps_previous_list() {
        let mut fence = Fence::default();
        let mut todos = vec![make_todo("1", "Buy milk", None)];

        // POST went through, but the reload GET failed
        let generation = fence.issue();
        if let Some(next) = accept_listing(&mut fence, generation, None) {
            todos = next;
        }

        assert_eq!(todos, vec![make_todo("1", "Buy milk", None)]);
        assert_eq!(fence.applied(), 0);
    }

    #[test]
    fn test_listing_after_add_contains_title() {
        let mut fence = Fence::default();
        let generation = fence.issue();
        let listing = vec![make_todo("1", "Buy milk", None), make_todo("2", "Walk dog", None)];

        let shown = accept_listing(&mut fence, generation, Some(listing)).unwrap();
        assert!(shown.iter().any(|t| t.title == "Walk dog"));
    }

    #[test]
    fn test_sync_images() {
        let mut images = HashMap::new();
        images.insert(TodoId::from("1"), ImageState::Loaded("https://img/1.jpg".into()));
        images.insert(TodoId::from("2"), ImageState::Failed);

        let todos = vec![make_todo("1", "a", None), make_todo("3", "c", None)];
        sync_images(&mut images, &todos);

        assert_eq!(images.len(), 2);
        assert_eq!(images[&TodoId::from("1")].url(), Some("https://img/1.jpg"));
        assert!(images[&TodoId::from("3")].is_loading());
        assert!(!images.contains_key(&TodoId::from("2")));
    }

    #[test]
    fn test_image_state_from_search() {
        let empty: PhotoSearch = serde_json::from_str(r#"{"photos": []}"#).unwrap();
        let state = ImageState::from_search(&empty);
        assert_eq!(state, ImageState::NotFound);
        assert_eq!(state.status_text(), Some("no image found"));

        let found: PhotoSearch =
            serde_json::from_str(r#"{"photos": [{"src": {"small": "https://img/s.jpg"}}]}"#).unwrap();
        let state = ImageState::from_search(&found);
        assert_eq!(state.url(), Some("https://img/s.jpg"));
        assert_eq!(state.status_text(), None);
    }

    #[test]
    fn test_image_result_only_for_current_list() {
        let mut fence = Fence::default();
        let first = fence.issue();
        fence.accept(first);
        assert!(image_is_current(&fence, first));

        let second = fence.issue();
        fence.accept(second);
        assert!(!image_is_current(&fence, first));
    }

    #[test]
    fn test_overdue_past_date() {
        let todo = make_todo("1", "Buy milk", Some("2024-01-01"));
        assert!(is_overdue(todo.due_date(), ymd(2025, 1, 1)));
    }

    #[test]
    fn test_not_overdue_today_future_or_undated() {
        let today = ymd(2025, 1, 1);
        assert!(!is_overdue(Some(today), today));
        assert!(!is_overdue(Some(ymd(2025, 1, 2)), today));
        assert!(!is_overdue(None, today));
    }

    #[test]
    fn test_overdue_uses_formatted_string_order() {
        // "9/1/2024" sorts after "10/1/2024"
        assert!(is_overdue(Some(ymd(2024, 10, 1)), ymd(2024, 9, 1)));
    }

    #[test]
    fn test_locale_date() {
        assert_eq!(locale_date(ymd(2024, 1, 5)), "1/5/2024");
        assert_eq!(locale_date(ymd(2024, 12, 25)), "12/25/2024");
        assert_eq!(date_input_value(Some(ymd(2024, 1, 5))), "2024-01-05");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_blank_title_is_not_submitted() {
        assert!(prepare_new_todo("", "2024-01-01", &[]).is_none());
        assert!(prepare_new_todo("   \t", "2024-01-01", &[]).is_none());
    }

    #[test]
    fn test_prepare_new_todo() {
        let depends = vec!["option1".to_string()];
        let todo = prepare_new_todo(" Buy milk ", "2024-01-01", &depends).unwrap();
        assert_eq!(todo.title, " Buy milk ");
        assert_eq!(todo.depends, depends);
        assert!(todo.date.is_some());

        let undated = prepare_new_todo("Buy milk", "", &[]).unwrap();
        assert!(undated.date.is_none());
    }
}

//! Frontend Models
//!
//! Data structures matching the backend todo API.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque task identifier assigned by the backend.
///
/// The backend may send it as a JSON string or a number; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TodoId(s),
            RawId::Int(n) => TodoId(n.to_string()),
            RawId::Float(n) => TodoId(n.to_string()),
        })
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId(s.to_string())
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Raw date as sent by the backend (ISO timestamp or plain date)
    #[serde(default)]
    pub date: Option<String>,
    /// Collected at creation time, never interpreted
    #[serde(default, deserialize_with = "null_as_empty")]
    pub depends: Vec<serde_json::Value>,
}

impl Todo {
    /// Calendar date of the task, if present and parseable
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<serde_json::Value>, D::Error> {
    Ok(Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse either an RFC 3339 timestamp (date taken in UTC) or `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Body of `POST /api/todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    /// Midnight UTC of the picked day, like a browser `Date` built from a date input
    pub date: Option<DateTime<Utc>>,
    pub depends: Vec<String>,
}

impl NewTodo {
    pub fn new(title: String, date: Option<NaiveDate>, depends: Vec<String>) -> Self {
        Self {
            title,
            date: date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc()),
            depends,
        }
    }
}

// ========================
// Image search response
// ========================

/// Subset of the image search response that is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSearch {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub src: PhotoSources,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSources {
    pub small: String,
}

impl PhotoSearch {
    /// Small thumbnail of the first result
    pub fn first_thumbnail(&self) -> Option<&str> {
        self.photos.first().map(|p| p.src.small.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_accepts_string_and_numeric_ids() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[
                {"id": "abc", "title": "Buy milk", "date": "2024-01-01T00:00:00.000Z", "depends": []},
                {"id": 7, "title": "Walk dog", "date": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(todos[0].id, TodoId::from("abc"));
        assert_eq!(todos[1].id, TodoId::from("7"));
        assert_eq!(todos[1].date, None);
        assert!(todos[1].depends.is_empty());
    }

    #[test]
    fn test_todo_null_depends() {
        let todo: Todo =
            serde_json::from_str(r#"{"id": "1", "title": "x", "depends": null}"#).unwrap();
        assert!(todo.depends.is_empty());
    }

    #[test]
    fn test_listing_with_numeric_depends() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Buy milk", "date": null, "depends": [2, 3]},
                {"id": 2, "title": "Walk dog", "date": null, "depends": ["1", {"id": 4}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].depends, vec![serde_json::json!(2), serde_json::json!(3)]);
        assert_eq!(todos[1].depends.len(), 2);
    }

    #[test]
    fn test_due_date_formats() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert_eq!(parse_date("2024-01-01"), Some(d("2024-01-01")));
        assert_eq!(parse_date("2024-03-05T00:00:00.000Z"), Some(d("2024-03-05")));
        assert_eq!(parse_date("2024-03-05T23:30:00-02:00"), Some(d("2024-03-06")));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_new_todo_wire_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        let body = NewTodo::new("Buy milk".into(), date, vec!["option2".into()]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Buy milk",
                "date": "2024-01-01T00:00:00Z",
                "depends": ["option2"],
            })
        );

        let undated = serde_json::to_value(NewTodo::new("x".into(), None, vec![])).unwrap();
        assert!(undated["date"].is_null());
    }

    #[test]
    fn test_photo_search_first_thumbnail() {
        let found: PhotoSearch = serde_json::from_str(
            r#"{"photos": [{"src": {"small": "https://img/1.jpg", "large": "x"}}, {"src": {"small": "https://img/2.jpg"}}]}"#,
        )
        .unwrap();
        assert_eq!(found.first_thumbnail(), Some("https://img/1.jpg"));

        let empty: PhotoSearch = serde_json::from_str(r#"{"photos": []}"#).unwrap();
        assert_eq!(empty.first_thumbnail(), None);
    }
}

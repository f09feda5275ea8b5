//! UI Components
//!
//! Leptos components of the todo board.

mod todo_form;
mod todo_list;
mod todo_row;
mod task_image;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use task_image::TaskImage;

//! Backend Command Wrappers
//!
//! Best-effort clients for the todo API and the image search API, organized
//! by collaborator. Failures are logged to the console and swallowed.

mod todo;
mod image;

// Re-export all public items
pub use todo::*;
pub use image::*;

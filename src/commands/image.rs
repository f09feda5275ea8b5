//! Image Commands
//!
//! Decorative image lookup for a task title.

use crate::config::ImageSearchConfig;
use crate::http::{self, FetchError};
use crate::models::PhotoSearch;
use crate::state::ImageState;

async fn search(config: &ImageSearchConfig, title: &str) -> Result<PhotoSearch, FetchError> {
    let url = config.search_url(title);
    let response = http::send("GET", &url, &[("Authorization", config.api_key.as_str())], None).await?;
    http::json(response).await
}

/// Look up one image for `title` and report the terminal state for its slot
pub async fn lookup_image(config: &ImageSearchConfig, title: &str) -> ImageState {
    web_sys::console::log_1(&format!("[IMAGES] loading image for {}", title).into());
    match search(config, title).await {
        Ok(found) => ImageState::from_search(&found),
        Err(e) => {
            web_sys::console::error_1(&format!("[IMAGES] Error fetching image: {}", e).into());
            ImageState::Failed
        }
    }
}

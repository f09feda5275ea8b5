//! Browser Fetch Binding
//!
//! Thin async wrapper over `window.fetch` used by the command modules.

use std::fmt;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Why a request produced no usable result
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request could not be built or sent, or the body could not be read
    Transport(String),
    /// Server answered with a non-2xx status
    Status { status: u16, text: String },
    /// Body did not have the expected shape
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "network error: {}", msg),
            FetchError::Status { status, text } => write!(f, "HTTP {} {}", status, text),
            FetchError::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

fn transport(err: JsValue) -> FetchError {
    FetchError::Transport(format!("{:?}", err))
}

/// Issue a request and return the response once it has a success status
pub async fn send(
    method: &str,
    url: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> Result<Response, FetchError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    for (name, value) in headers {
        request.headers().set(name, value).map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| FetchError::Transport("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = value.dyn_into().map_err(transport)?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }
    Ok(response)
}

/// Read a JSON body into `T`
pub async fn json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let value = JsFuture::from(response.json().map_err(transport)?)
        .await
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

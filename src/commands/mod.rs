//! Server Request Bindings
//!
//! Async wrappers over `fetch` for the forum endpoints, organized by domain.

mod community;
mod csrf;
mod post_form;
mod vote;

use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::context;
use crate::dom;
use crate::error::{ClientError, Result};

// Re-export all public items
pub use community::*;
pub use csrf::*;
pub use post_form::*;
pub use vote::*;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Request payloads the forum endpoints accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// Already urlencoded `key=value&...`
    Form(String),
    Json(String),
}

impl Body {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Body::Empty => None,
            Body::Form(_) => Some(FORM_CONTENT_TYPE),
            Body::Json(_) => Some(JSON_CONTENT_TYPE),
        }
    }

    pub fn into_payload(self) -> Option<String> {
        match self {
            Body::Empty => None,
            Body::Form(payload) | Body::Json(payload) => Some(payload),
        }
    }
}

/// Only a plain 200 counts as success
pub fn check_status(url: &str, status: u16) -> Result<()> {
    if status == 200 {
        Ok(())
    } else {
        Err(ClientError::Application { status, url: url.to_string() })
    }
}

/// Authenticated POST, returns the response text
async fn post(url: &str, body: Body) -> Result<String> {
    let config = context::config();
    let token = csrf_token(&config.csrf_cookie_name)?;

    let content_type = body.content_type();
    let init = RequestInit::new();
    init.set_method("POST");
    if let Some(payload) = body.into_payload() {
        init.set_body(&JsValue::from_str(&payload));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(ClientError::transport)?;
    let headers = request.headers();
    headers.set(CSRF_HEADER, &token).map_err(ClientError::transport)?;
    headers.set(REQUESTED_WITH_HEADER, XML_HTTP_REQUEST).map_err(ClientError::transport)?;
    if let Some(content_type) = content_type {
        headers.set("Content-Type", content_type).map_err(ClientError::transport)?;
    }

    send(url, &request).await
}

async fn get(url: &str) -> Result<String> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(ClientError::transport)?;
    request
        .headers()
        .set(REQUESTED_WITH_HEADER, XML_HTTP_REQUEST)
        .map_err(ClientError::transport)?;

    send(url, &request).await
}

async fn send(url: &str, request: &Request) -> Result<String> {
    let window = dom::window()?;
    log::debug!("{} {}", request.method(), url);

    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ClientError::transport)?;
    let response: Response = value.dyn_into().map_err(ClientError::transport)?;
    check_status(url, response.status())?;

    let text: Promise = response.text().map_err(ClientError::transport)?;
    let body = JsFuture::from(text).await.map_err(ClientError::transport)?;
    Ok(body.as_string().unwrap_or_default())
}

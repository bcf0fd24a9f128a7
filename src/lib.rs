//! Commune Frontend
//!
//! WASM module loaded by the forum's server-rendered pages. Templates call
//! the exported functions from `onclick` / `onchange` attributes; each one
//! sends a single request and patches the page from the answer.

pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod models;
pub mod sequencer;
pub mod vote;

use wasm_bindgen::prelude::*;

use crate::config::{ClientConfig, CONFIG_ELEMENT_ID};

pub use components::{
    accept_request, change_post_type, join_community, leave_community, reject_request, submit_vote,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match dom::text_of(CONFIG_ELEMENT_ID) {
        Some(text) => match ClientConfig::from_json(&text) {
            Ok(config) => (config, None),
            Err(e) => (ClientConfig::default(), Some(e)),
        },
        None => (ClientConfig::default(), None),
    };

    // a second instantiation keeps the first logger
    let _ = console_ring_logger::init(config.log_level, config.log_capacity);
    if let Some(e) = config_error {
        log::warn!("[START] ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
    }
    log::info!("[START] commune-ui loaded, community root {}", config.community_root);

    context::install(config);
}

/// Recent log lines as a JS array of strings, for debugging from devtools
#[wasm_bindgen]
pub fn recent_log_lines() -> JsValue {
    serde_wasm_bindgen::to_value(&console_ring_logger::recent_lines()).unwrap_or(JsValue::NULL)
}

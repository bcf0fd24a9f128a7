//! Post Type Form
//!
//! Swaps the post-creation form body when the type selector changes.

use wasm_bindgen::prelude::*;

use crate::commands;
use crate::context;
use crate::dom;
use crate::error::{describe, ClientError, Result};

const POST_TYPE_SELECT_ID: &str = "id_post_type";
const FORM_CONTAINER_ID: &str = "form-container";
const MULTIPART: &str = "multipart/form-data";

/// `enctype` the form needs for a post type
pub fn form_enctype(post_type: &str) -> Option<&'static str> {
    (post_type == "image").then_some(MULTIPART)
}

#[wasm_bindgen]
pub async fn change_post_type() {
    if let Err(e) = swap_form().await {
        log::error!("[POST FORM] {}", e);
    }
}

async fn swap_form() -> Result<()> {
    let select = dom::element_by_id(POST_TYPE_SELECT_ID)?;
    let post_type = dom::element_value(&select).unwrap_or_default();

    let config = context::config();
    let form = commands::fetch_post_form(&config, &post_type).await?;

    let container = dom::element_by_id(FORM_CONTAINER_ID)?;
    container.set_inner_html(&form.form_html);
    let enctype = match form_enctype(&post_type) {
        Some(enctype) => container.set_attribute("enctype", enctype),
        None => container.remove_attribute("enctype"),
    };
    enctype.map_err(|e| ClientError::dom(describe(&e)))?;

    // fresh markup renders the selector at its default value
    let select = dom::element_by_id(POST_TYPE_SELECT_ID)?;
    dom::set_element_value(&select, &post_type)?;
    log::info!("[POST FORM] switched to {}", post_type);
    Ok(())
}

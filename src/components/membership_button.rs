//! Membership Button
//!
//! Join / leave button on a community page.

use wasm_bindgen::prelude::*;

use crate::commands;
use crate::config::ClientConfig;
use crate::context;
use crate::dom;
use crate::error::{describe, ClientError, Result};

const JOIN_BUTTON_ID: &str = "join_community_button";
const CREATE_POST_LINK_ID: &str = "create_post_link";
const CREATE_POST_LINK_CLASS: &str = "btn btn-primary rounded-3 mt-3";

#[wasm_bindgen]
pub async fn join_community(community_slug: String) {
    let config = context::config();
    let result = match commands::verify_join(&config, &community_slug).await {
        Ok(response) if response.success => mark_joined(&config, &community_slug),
        Ok(_) => Err(ClientError::Refused(format!("join {}", community_slug))),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => log::info!("[MEMBERSHIP] joined {}", community_slug),
        Err(e) => {
            log::error!("[MEMBERSHIP] join {} failed: {}", community_slug, e);
            dom::alert("Could not join this community");
        }
    }
}

#[wasm_bindgen]
pub async fn leave_community(community_slug: String) {
    let config = context::config();
    let result = match commands::leave(&config, &community_slug).await {
        Ok(response) if response.success => mark_left(),
        Ok(_) => Err(ClientError::Refused(format!("leave {}", community_slug))),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => log::info!("[MEMBERSHIP] left {}", community_slug),
        Err(e) => {
            log::error!("[MEMBERSHIP] leave {} failed: {}", community_slug, e);
            dom::alert("Could not leave this community");
        }
    }
}

fn mark_joined(config: &ClientConfig, slug: &str) -> Result<()> {
    let button = dom::element_by_id(JOIN_BUTTON_ID)?;
    dom::set_element_value(&button, "Joined!")?;
    dom::set_disabled(&button, true)?;

    if dom::element_by_id(CREATE_POST_LINK_ID).is_ok() {
        return Ok(());
    }
    let parent = button
        .parent_element()
        .ok_or_else(|| ClientError::dom("join button has no parent"))?;
    let link = dom::document()?
        .create_element("a")
        .map_err(|e| ClientError::dom(describe(&e)))?;
    link.set_id(CREATE_POST_LINK_ID);
    link.set_class_name(CREATE_POST_LINK_CLASS);
    for (name, value) in [("href", config.new_post_url(slug)), ("style", "width: 11em;".to_string())] {
        link.set_attribute(name, &value)
            .map_err(|e| ClientError::dom(describe(&e)))?;
    }
    link.set_text_content(Some("Create Post"));
    parent
        .append_child(&link)
        .map_err(|e| ClientError::dom(describe(&e)))?;
    Ok(())
}

fn mark_left() -> Result<()> {
    let button = dom::element_by_id(JOIN_BUTTON_ID)?;
    dom::set_element_value(&button, "Join")?;
    dom::set_disabled(&button, false)?;
    if let Ok(link) = dom::element_by_id(CREATE_POST_LINK_ID) {
        link.remove();
    }
    Ok(())
}

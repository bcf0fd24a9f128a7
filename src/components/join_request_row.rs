//! Join Request Row
//!
//! Accept / reject buttons in the moderators' join-request table. The
//! templates call these with the endpoint and the clicked button.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::commands;
use crate::dom;

const ACCEPT_FAILED: &str = "Error accepting request";
const REJECT_FAILED: &str = "Error rejecting request";

/// Id of the textarea holding the rejection message for request `id`
pub fn reject_message_id(request_id: &str) -> String {
    format!("reject-message-{}", request_id)
}

#[wasm_bindgen]
pub async fn accept_request(url: String, button: HtmlElement) {
    let result = match commands::accept_join_request(&url).await {
        Ok(()) => dom::replace_cell_text(&button, "Accepted"),
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        log::error!("[JOIN REQUEST] accept via {} failed: {}", url, e);
        dom::alert(ACCEPT_FAILED);
    }
}

#[wasm_bindgen]
pub async fn reject_request(url: String, button: HtmlElement) {
    let request_id = dom::element_value(&button).unwrap_or_default();
    let message = dom::element_by_id(&reject_message_id(&request_id))
        .ok()
        .and_then(|field| dom::element_value(&field))
        .unwrap_or_default();

    let result = match commands::reject_join_request(&url, &message).await {
        Ok(()) => dom::replace_cell_text(&button, "Rejected"),
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        log::error!("[JOIN REQUEST] reject {} via {} failed: {}", request_id, url, e);
        dom::alert(REJECT_FAILED);
    }
}

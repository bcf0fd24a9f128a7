//! DOM Access
//!
//! Everything that reads or writes the page goes through here. The page is
//! the only store of visual state; nothing is cached between calls.

use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDocument, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use crate::error::{describe, ClientError, Result};
use crate::vote::{parse_reputation, EntityVoteState, ToggleClasses, VoteAnchors, DOWN_ARROW, UP_ARROW};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| ClientError::dom("no window"))
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or_else(|| ClientError::dom("no document"))
}

pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::dom(format!("#{} not found", id)))
}

/// Address of the current page, base for relative endpoints
pub fn page_url() -> Option<Url> {
    let href = window().ok()?.location().href().ok()?;
    Url::parse(&href).ok()
}

/// Raw `document.cookie`
pub fn cookies() -> Result<String> {
    let document: HtmlDocument = document()?
        .dyn_into()
        .map_err(|_| ClientError::dom("document is not an HTML document"))?;
    document.cookie().map_err(|e| ClientError::dom(describe(&e)))
}

/// Text of an element if present, used for the embedded config
pub fn text_of(id: &str) -> Option<String> {
    document().ok()?.get_element_by_id(id)?.text_content()
}

/// Blocking `alert()`. Failing to show one is only logged.
pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(|e| ClientError::dom(describe(&e))));
    if let Err(e) = shown {
        log::warn!("could not show alert {:?}: {}", message, e);
    }
}

/// Current value of a form control, falling back to its `value` attribute
pub fn element_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(text_area.value());
    }
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        return Some(button.value());
    }
    element.get_attribute("value")
}

pub fn set_element_value(element: &Element, value: &str) -> Result<()> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
        text_area.set_value(value);
    } else if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_value(value);
    } else {
        element.set_attribute("value", value).map_err(|e| ClientError::dom(describe(&e)))?;
    }
    Ok(())
}

pub fn set_disabled(element: &Element, disabled: bool) -> Result<()> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        element.set_attribute("disabled", "").map_err(|e| ClientError::dom(describe(&e)))?;
    } else {
        element.remove_attribute("disabled").map_err(|e| ClientError::dom(describe(&e)))?;
    }
    Ok(())
}

/// Replace the content of the closest `<td>` around `element` with `text`
pub fn replace_cell_text(element: &Element, text: &str) -> Result<()> {
    let cell = element
        .closest("td")
        .map_err(|e| ClientError::dom(describe(&e)))?
        .ok_or_else(|| ClientError::dom("element is not inside a table cell"))?;
    cell.set_text_content(Some(text));
    Ok(())
}

/// The three elements showing one entity's vote state
pub struct VoteElements {
    reputation: Element,
    up_arrow: Element,
    down_arrow: Element,
}

impl VoteElements {
    /// Resolve all anchors up front so a missing one aborts before any write
    pub fn resolve(anchors: &VoteAnchors) -> Result<Self> {
        Ok(Self {
            reputation: element_by_id(&anchors.reputation)?,
            up_arrow: element_by_id(&anchors.up_arrow)?,
            down_arrow: element_by_id(&anchors.down_arrow)?,
        })
    }

    pub fn read_state(&self) -> Result<EntityVoteState> {
        let text = self.reputation.text_content().unwrap_or_default();
        let reputation = parse_reputation(&text)
            .ok_or_else(|| ClientError::dom(format!("reputation {:?} is not an integer", text)))?;
        Ok(EntityVoteState {
            up_active: self.up_arrow.class_list().contains(UP_ARROW.active),
            down_active: self.down_arrow.class_list().contains(DOWN_ARROW.active),
            reputation,
        })
    }

    pub fn write_state(&self, state: &EntityVoteState) -> Result<()> {
        set_toggle(&self.up_arrow, UP_ARROW, state.up_active)?;
        set_toggle(&self.down_arrow, DOWN_ARROW, state.down_active)?;
        self.reputation.set_text_content(Some(&state.reputation.to_string()));
        Ok(())
    }
}

fn set_toggle(element: &Element, classes: ToggleClasses, active: bool) -> Result<()> {
    let (add, remove) = classes.swap(active);
    let list = element.class_list();
    list.remove_1(remove).map_err(|e| ClientError::dom(describe(&e)))?;
    list.add_1(add).map_err(|e| ClientError::dom(describe(&e)))?;
    Ok(())
}

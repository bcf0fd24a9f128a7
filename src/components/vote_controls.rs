//! Vote Controls
//!
//! Up/down arrows and reputation counter of a post or comment.

use wasm_bindgen::prelude::*;

use crate::commands;
use crate::context;
use crate::dom::{self, VoteElements};
use crate::error::Result;
use crate::models::VoteResponse;
use crate::sequencer::DispatchKey;
use crate::vote::{reconcile, EntityVoteState, VoteAnchors};

/// Cast a vote and reconcile the entity's widgets with the server's answer.
///
/// `endpoint_url` identifies target and direction; `entity_id` is only used
/// to find the elements. Answers reach the page in the order the votes were
/// cast. Failures are logged and leave the page untouched.
#[wasm_bindgen]
pub async fn submit_vote(endpoint_url: String, entity_id: String) {
    let key = DispatchKey::from_endpoint(dom::page_url().as_ref(), &endpoint_url, &entity_id);
    let ticket = context::dispatch(key);
    let outcome = commands::cast_vote(&endpoint_url).await;

    if let Err(e) = &outcome {
        if e.is_application() {
            log::warn!("[VOTE] rejected: {}", e);
        } else {
            log::error!("[VOTE] {} failed: {}", endpoint_url, e);
        }
    }

    let released = context::settle(&ticket, outcome);
    if released.is_empty() {
        log::debug!(
            "[VOTE] holding answer for {:?}, {} request(s) pending",
            ticket.key(),
            context::in_flight(ticket.key())
        );
        return;
    }

    match apply_outcomes(&entity_id, &released) {
        Ok(Some(state)) => log::info!(
            "[VOTE] {} -> rep={} up={} down={}",
            endpoint_url, state.reputation, state.up_active, state.down_active
        ),
        Ok(None) => {}
        Err(e) => log::error!("[VOTE] could not update {}: {}", entity_id, e),
    }
}

/// Write the released outcomes to the page in one pass. `None` when none of
/// them succeeded and the page was not touched.
fn apply_outcomes(entity_id: &str, outcomes: &[Result<VoteResponse>]) -> Result<Option<EntityVoteState>> {
    let Some(first) = outcomes.iter().find_map(|outcome| outcome.as_ref().ok()) else {
        return Ok(None);
    };
    let elements = VoteElements::resolve(&VoteAnchors::new(first.object_type, entity_id))?;
    let next = reconcile(elements.read_state()?, outcomes);
    elements.write_state(&next)?;
    Ok(Some(next))
}

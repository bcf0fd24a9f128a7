//! Client Context
//!
//! State shared by every exported action. The browser runs us on a single
//! thread, so it lives in a thread-local cell.

use std::cell::RefCell;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::VoteResponse;
use crate::sequencer::{DispatchKey, RequestSequencer, Ticket};

#[derive(Debug, Default)]
pub struct ClientContext {
    config: ClientConfig,
    sequencer: RequestSequencer<Result<VoteResponse>>,
}

thread_local! {
    static CONTEXT: RefCell<ClientContext> = RefCell::new(ClientContext::default());
}

/// Replace the configuration (done once at module start)
pub fn install(config: ClientConfig) {
    CONTEXT.with(|ctx| ctx.borrow_mut().config = config);
}

pub fn config() -> ClientConfig {
    CONTEXT.with(|ctx| ctx.borrow().config.clone())
}

/// Register an outgoing vote request
pub fn dispatch(key: DispatchKey) -> Ticket {
    CONTEXT.with(|ctx| ctx.borrow_mut().sequencer.dispatch(key))
}

/// Hand in a finished vote request; returns the outcomes now due for the
/// page, in dispatch order
pub fn settle(ticket: &Ticket, outcome: Result<VoteResponse>) -> Vec<Result<VoteResponse>> {
    CONTEXT.with(|ctx| ctx.borrow_mut().sequencer.settle(ticket, outcome))
}

/// Vote requests for `key` not yet applied
pub fn in_flight(key: &DispatchKey) -> usize {
    CONTEXT.with(|ctx| ctx.borrow().sequencer.in_flight(key))
}

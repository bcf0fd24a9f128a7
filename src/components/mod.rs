//! Page Components
//!
//! One file per interactive piece of the server-rendered pages. Each exports
//! the functions its template wires to `onclick` / `onchange`.

mod join_request_row;
mod membership_button;
mod post_type_form;
mod vote_controls;

pub use join_request_row::{accept_request, reject_request};
pub use membership_button::{join_community, leave_community};
pub use post_type_form::change_post_type;
pub use vote_controls::submit_vote;

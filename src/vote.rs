//! Vote Reconciliation
//!
//! Pure state transition for a voteable entity. The DOM layer reads an
//! [`EntityVoteState`], feeds it through [`EntityVoteState::apply`] and writes
//! the result back.

use crate::error::Result;
use crate::models::{ObjectType, VoteResponse, VoteType};

/// CSS class pair for one arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleClasses {
    pub inactive: &'static str,
    pub active: &'static str,
}

impl ToggleClasses {
    /// (class to add, class to remove) for the wanted state
    pub fn swap(self, active: bool) -> (&'static str, &'static str) {
        if active {
            (self.active, self.inactive)
        } else {
            (self.inactive, self.active)
        }
    }
}

pub const UP_ARROW: ToggleClasses = ToggleClasses { inactive: "up-arrow", active: "up-arrow-active" };
pub const DOWN_ARROW: ToggleClasses = ToggleClasses { inactive: "down-arrow", active: "down-arrow-active" };

/// Visual vote state of one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityVoteState {
    pub up_active: bool,
    pub down_active: bool,
    pub reputation: i64,
}

impl EntityVoteState {
    /// Reconcile against the server's answer.
    ///
    /// The voted direction flips, the opposite one is always cleared, and the
    /// reputation moves by `rep_change`. Clearing the opposite arrow keeps the
    /// two arrows mutually exclusive whatever state we start from.
    pub fn apply(self, response: &VoteResponse) -> Self {
        let (up_active, down_active) = match response.vote_type {
            VoteType::Up => (!self.up_active, false),
            VoteType::Down => (false, !self.down_active),
        };
        Self {
            up_active,
            down_active,
            reputation: self.reputation + response.rep_change,
        }
    }
}

/// Fold finished requests into the state, oldest first. Failed requests
/// leave it as it was.
pub fn reconcile<'a>(
    state: EntityVoteState,
    outcomes: impl IntoIterator<Item = &'a Result<VoteResponse>>,
) -> EntityVoteState {
    outcomes.into_iter().fold(state, |state, outcome| match outcome {
        Ok(response) => state.apply(response),
        Err(_) => state,
    })
}

/// Element ids the page templates give one entity's vote widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteAnchors {
    pub reputation: String,
    pub up_arrow: String,
    pub down_arrow: String,
}

impl VoteAnchors {
    pub fn new(object_type: ObjectType, entity_id: &str) -> Self {
        let prefix = object_type.dom_prefix();
        Self {
            reputation: format!("{}-rep-{}", prefix, entity_id),
            up_arrow: format!("{}-up-arrow-{}", prefix, entity_id),
            down_arrow: format!("{}-down-arrow-{}", prefix, entity_id),
        }
    }
}

/// Displayed reputation text to integer
pub fn parse_reputation(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn response(vote_type: VoteType, rep_change: i64) -> VoteResponse {
        VoteResponse { vote_type, rep_change, object_type: ObjectType::Post }
    }

    #[test]
    fn test_upvote_from_neutral() {
        let start = EntityVoteState { up_active: false, down_active: false, reputation: 10 };
        let next = start.apply(&response(VoteType::Up, 1));
        assert_eq!(next, EntityVoteState { up_active: true, down_active: false, reputation: 11 });
    }

    #[test]
    fn test_second_upvote_undoes_first() {
        let start = EntityVoteState { up_active: false, down_active: false, reputation: 10 };
        let voted = start.apply(&response(VoteType::Up, 1));
        let undone = voted.apply(&response(VoteType::Up, -1));
        assert_eq!(undone, start);
    }

    #[test]
    fn test_switching_direction_clears_other_arrow() {
        let up = EntityVoteState { up_active: true, down_active: false, reputation: 5 };
        let down = up.apply(&response(VoteType::Down, -2));
        assert_eq!(down, EntityVoteState { up_active: false, down_active: true, reputation: 3 });

        let back_up = down.apply(&response(VoteType::Up, 2));
        assert_eq!(back_up, EntityVoteState { up_active: true, down_active: false, reputation: 5 });
    }

    #[test]
    fn test_inconsistent_start_heals_after_one_vote() {
        let broken = EntityVoteState { up_active: true, down_active: true, reputation: 0 };
        let next = broken.apply(&response(VoteType::Down, 0));
        assert!(!next.up_active);
        assert!(!next.down_active);
    }

    #[test]
    fn test_arrows_never_both_active() {
        let mut state = EntityVoteState::default();
        let sequence = [VoteType::Up, VoteType::Up, VoteType::Down, VoteType::Up, VoteType::Down, VoteType::Down];
        for vote_type in sequence {
            state = state.apply(&response(vote_type, 0));
            assert!(!(state.up_active && state.down_active));
        }
    }

    #[test]
    fn test_reputation_is_not_clamped() {
        let start = EntityVoteState { up_active: false, down_active: false, reputation: 0 };
        let next = start.apply(&response(VoteType::Down, -3));
        assert_eq!(next.reputation, -3);
    }

    #[test]
    fn test_failed_request_leaves_state_unchanged() {
        let start = EntityVoteState { up_active: true, down_active: false, reputation: 10 };
        let server_error: Result<VoteResponse> = Err(ClientError::Application { status: 500, url: "/posts/42/up/".to_string() });
        let network_error: Result<VoteResponse> = Err(ClientError::Transport("TypeError: Failed to fetch".to_string()));

        assert_eq!(reconcile(start, [&server_error]), start);
        assert_eq!(reconcile(start, [&network_error]), start);
    }

    #[test]
    fn test_reconcile_skips_failures_between_successes() {
        let start = EntityVoteState { up_active: false, down_active: false, reputation: 10 };
        let outcomes: Vec<Result<VoteResponse>> = vec![
            Ok(response(VoteType::Up, 1)),
            Err(ClientError::Application { status: 500, url: "/posts/42/down/".to_string() }),
            Ok(response(VoteType::Up, -1)),
        ];
        assert_eq!(reconcile(start, &outcomes), start);
    }

    #[test]
    fn test_anchor_ids() {
        let anchors = VoteAnchors::new(ObjectType::Post, "42");
        assert_eq!(anchors.reputation, "post-rep-42");
        assert_eq!(anchors.up_arrow, "post-up-arrow-42");
        assert_eq!(anchors.down_arrow, "post-down-arrow-42");

        let anchors = VoteAnchors::new(ObjectType::Comment, "7");
        assert_eq!(anchors.up_arrow, "comment-up-arrow-7");
    }

    #[test]
    fn test_parse_reputation() {
        assert_eq!(parse_reputation(" 11\n"), Some(11));
        assert_eq!(parse_reputation("-4"), Some(-4));
        assert_eq!(parse_reputation("eleven"), None);
        assert_eq!(parse_reputation(""), None);
    }

    #[test]
    fn test_class_swap() {
        assert_eq!(UP_ARROW.swap(true), ("up-arrow-active", "up-arrow"));
        assert_eq!(DOWN_ARROW.swap(false), ("down-arrow", "down-arrow-active"));
    }
}

//! Request Sequencing
//!
//! Vote responses are deltas, so every one of them must reach the page and in
//! the order the requests were sent. Each entity gets a queue of dispatched
//! requests; a finished request is held back until all earlier ones for the
//! same entity have finished, then released together with them.

use std::collections::{BTreeMap, HashMap};

use url::Url;

/// Path segments naming a vote direction rather than a target
const DIRECTION_SEGMENTS: &[&str] = &[
    "up", "down", "upvote", "downvote", "up-vote", "down-vote", "up_vote", "down_vote",
    "vote-up", "vote-down", "vote_up", "vote_down",
];

/// Entity a vote request targets: the endpoint path with its direction
/// segment removed, plus the display id. Up and down votes on one entity
/// share a key; a post and a comment never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DispatchKey {
    pub target: String,
    pub entity_id: String,
}

impl DispatchKey {
    /// `page` resolves relative endpoints; without it only absolute URLs
    /// are normalized and anything else is keyed verbatim.
    pub fn from_endpoint(page: Option<&Url>, endpoint_url: &str, entity_id: &str) -> Self {
        let target = Url::options()
            .base_url(page)
            .parse(endpoint_url)
            .ok()
            .and_then(|url| vote_target(&url))
            .unwrap_or_else(|| endpoint_url.to_string());
        Self { target, entity_id: entity_id.to_string() }
    }
}

/// Path of `url` without direction segments, e.g. `/c/rust/posts/42`
fn vote_target(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !DIRECTION_SEGMENTS.contains(&segment.to_ascii_lowercase().as_str()))
        .collect();
    Some(format!("/{}", segments.join("/")))
}

/// Proof of dispatch, handed back when the response arrives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: DispatchKey,
    seq: u64,
}

impl Ticket {
    pub fn key(&self) -> &DispatchKey {
        &self.key
    }
}

#[derive(Debug)]
enum Slot<T> {
    InFlight,
    Done(T),
}

#[derive(Debug)]
pub struct RequestSequencer<T> {
    next_seq: u64,
    queues: HashMap<DispatchKey, BTreeMap<u64, Slot<T>>>,
}

impl<T> Default for RequestSequencer<T> {
    fn default() -> Self {
        Self { next_seq: 0, queues: HashMap::new() }
    }
}

impl<T> RequestSequencer<T> {
    /// Register a new request for `key` behind any already in flight
    pub fn dispatch(&mut self, key: DispatchKey) -> Ticket {
        self.next_seq += 1;
        self.queues.entry(key.clone()).or_default().insert(self.next_seq, Slot::InFlight);
        Ticket { key, seq: self.next_seq }
    }

    /// Record the outcome of a finished request and return every outcome
    /// now ready to apply, oldest first. Empty while an earlier request for
    /// the same entity is still in flight.
    pub fn settle(&mut self, ticket: &Ticket, outcome: T) -> Vec<T> {
        let Some(queue) = self.queues.get_mut(&ticket.key) else {
            return Vec::new();
        };
        match queue.get_mut(&ticket.seq) {
            Some(slot) if matches!(slot, Slot::InFlight) => *slot = Slot::Done(outcome),
            _ => return Vec::new(),
        }

        let mut ready = Vec::new();
        while let Some(entry) = queue.first_entry() {
            if matches!(entry.get(), Slot::InFlight) {
                break;
            }
            if let Slot::Done(outcome) = entry.remove() {
                ready.push(outcome);
            }
        }
        if queue.is_empty() {
            self.queues.remove(&ticket.key);
        }
        ready
    }

    /// Requests for `key` dispatched but not yet released
    pub fn in_flight(&self, key: &DispatchKey) -> usize {
        self.queues.get(key).map_or(0, BTreeMap::len)
    }
}

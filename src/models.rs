//! Wire Models
//!
//! Request and response bodies exchanged with the forum server.

use serde::{Deserialize, Serialize};

/// Kind of voteable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Post,
    Comment,
}

impl ObjectType {
    /// Prefix used by page templates for the entity's element ids
    pub fn dom_prefix(self) -> &'static str {
        match self {
            ObjectType::Post => "post",
            ObjectType::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// Server answer to a vote. `rep_change` is a delta, not a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub vote_type: VoteType,
    pub rep_change: i64,
    pub object_type: ObjectType,
}

/// Answer to join / leave attempts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MembershipResponse {
    #[serde(default)]
    pub success: bool,
}

/// Rendered post-creation form for a post type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostFormResponse {
    pub form_html: String,
}

#[derive(Debug, Serialize)]
pub struct RejectRequestArgs<'a> {
    pub reject_message: &'a str,
}

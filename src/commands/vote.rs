//! Vote Commands

use crate::error::Result;
use crate::models::VoteResponse;
use super::{post, Body};

/// POST to a vote endpoint. The URL carries target and direction.
pub async fn cast_vote(endpoint_url: &str) -> Result<VoteResponse> {
    let body = post(endpoint_url, Body::Empty).await?;
    Ok(serde_json::from_str(&body)?)
}

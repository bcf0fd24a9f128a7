//! Community Commands
//!
//! Membership and join-request moderation endpoints.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{MembershipResponse, RejectRequestArgs};
use super::{post, Body};

/// `community_slug=<slug>` form body sent with join attempts
pub fn join_form(slug: &str) -> Body {
    Body::Form(format!("community_slug={}", utf8_percent_encode(slug, NON_ALPHANUMERIC)))
}

pub async fn verify_join(config: &ClientConfig, slug: &str) -> Result<MembershipResponse> {
    let body = post(&config.join_url(slug), join_form(slug)).await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn leave(config: &ClientConfig, slug: &str) -> Result<MembershipResponse> {
    let body = post(&config.leave_url(slug), Body::Empty).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Body is an empty JSON object
pub async fn accept_join_request(url: &str) -> Result<()> {
    post(url, Body::Json("{}".to_string())).await?;
    Ok(())
}

pub async fn reject_join_request(url: &str, reject_message: &str) -> Result<()> {
    let payload = serde_json::to_string(&RejectRequestArgs { reject_message })?;
    post(url, Body::Json(payload)).await?;
    Ok(())
}

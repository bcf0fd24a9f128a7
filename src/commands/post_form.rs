//! Post Form Commands

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::PostFormResponse;
use super::get;

/// Rendered post-creation form for `post_type`
pub async fn fetch_post_form(config: &ClientConfig, post_type: &str) -> Result<PostFormResponse> {
    let body = get(&config.change_form_type_url(post_type)).await?;
    Ok(serde_json::from_str(&body)?)
}

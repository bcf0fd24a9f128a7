//! Client Configuration
//!
//! Pages may embed `<script type="application/json" id="commune-config">`
//! to override any of these; missing fields keep their defaults.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::error::Result;

/// Id of the JSON config element
pub const CONFIG_ELEMENT_ID: &str = "commune-config";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Cookie holding the CSRF token
    pub csrf_cookie_name: String,
    /// Mount point of community pages, e.g. `/c`
    pub community_root: String,
    /// Endpoint returning the post form for a type
    pub change_form_type_path: String,
    pub log_level: LevelFilter,
    /// Lines kept by the console ring logger
    pub log_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            csrf_cookie_name: "csrftoken".to_string(),
            community_root: "/c".to_string(),
            change_form_type_path: "/c/change-form-type".to_string(),
            log_level: LevelFilter::Info,
            log_capacity: console_ring_logger::DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn community_path(&self, slug: &str, action: &str) -> String {
        format!(
            "{}/{}/{}/",
            self.community_root.trim_end_matches('/'),
            utf8_percent_encode(slug, PATH_SEGMENT),
            action
        )
    }

    pub fn join_url(&self, slug: &str) -> String {
        self.community_path(slug, "verify-join")
    }

    pub fn leave_url(&self, slug: &str) -> String {
        self.community_path(slug, "leave")
    }

    pub fn new_post_url(&self, slug: &str) -> String {
        self.community_path(slug, "new-post")
    }

    pub fn change_form_type_url(&self, post_type: &str) -> String {
        format!(
            "{}/{}",
            self.change_form_type_path.trim_end_matches('/'),
            utf8_percent_encode(post_type, PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.join_url("rustaceans"), "/c/rustaceans/verify-join/");
        assert_eq!(config.new_post_url("rustaceans"), "/c/rustaceans/new-post/");
        assert_eq!(config.change_form_type_url("image"), "/c/change-form-type/image");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"community_root":"/communities/","log_level":"debug"}"#).unwrap();
        assert_eq!(config.community_root, "/communities/");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.leave_url("go"), "/communities/go/leave/");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(ClientConfig::from_json("{\"log_capacity\": \"lots\"}").is_err());
        assert!(ClientConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_slug_is_escaped() {
        let config = ClientConfig::default();
        assert_eq!(config.join_url("a b/c"), "/c/a%20b%2Fc/verify-join/");
        assert_eq!(config.change_form_type_url("link?x"), "/c/change-form-type/link%3Fx");
    }
}

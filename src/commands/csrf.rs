//! CSRF Token
//!
//! The server issues the token as a cookie; every POST echoes it in a header.

use percent_encoding::percent_decode_str;

use crate::dom;
use crate::error::{ClientError, Result};

/// Value of cookie `name` in a `document.cookie` string, percent-decoded
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
        .map(|raw| match percent_decode_str(raw).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}

pub fn csrf_token(cookie_name: &str) -> Result<String> {
    let cookies = dom::cookies()?;
    cookie_value(&cookies, cookie_name)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ClientError::MissingCsrfToken(cookie_name.to_string()))
}

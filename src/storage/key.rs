//! Cache key space.
//!
//! Every entry lives in one flat namespace without kind prefixes. Absolute
//! URLs and US postal codes never overlap syntactically.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::utils::url::is_absolute_http;

static POSTAL_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{5}(?:-?\d{4})?$").ok());

/// A validated cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheKey {
    /// Absolute page URL (state index, state page or park page)
    Url(String),
    /// 5- or 9-digit postal code of a radius search
    PostalCode(String),
}

impl CacheKey {
    /// Key for an absolute http(s) URL.
    pub fn url(url: &str) -> Result<Self> {
        if is_absolute_http(url) {
            Ok(Self::Url(url.to_string()))
        } else {
            Err(AppError::invalid_key(url, "not an absolute http(s) URL"))
        }
    }

    /// Key for a postal code such as `49931` or `82190-0168`.
    pub fn postal_code(code: &str) -> Result<Self> {
        let code = code.trim();
        if POSTAL_CODE.as_ref().is_some_and(|re| re.is_match(code)) {
            Ok(Self::PostalCode(code.to_string()))
        } else {
            Err(AppError::invalid_key(code, "not a 5- or 9-digit postal code"))
        }
    }

    /// Classify a raw key read from storage.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::url(raw).or_else(|_| Self::postal_code(raw))
    }

    pub fn as_str(&self) -> &str {
        match self {
            CacheKey::Url(s) | CacheKey::PostalCode(s) => s,
        }
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// src/models/mod.rs

//! Domain models for the site directory.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod place;
mod selectors;
mod site;

use std::collections::BTreeMap;

// Re-export all public types
pub use config::{CacheConfig, Config, HttpConfig, PlacesConfig, SiteConfig};
pub use place::NearbyPlace;
pub use selectors::SiteSelectors;
pub use site::{SiteField, SiteRecord};

/// Lower-cased state name to absolute state page URL.
pub type StateIndex = BTreeMap<String, String>;

/// Raw radius-search response, passed through unchanged.
pub type NearbyPlacesResult = serde_json::Value;

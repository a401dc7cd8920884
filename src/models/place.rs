// src/models/place.rs

//! Display projection of a radius-search result.

use std::fmt;

use serde_json::Value;

/// One place from a nearby-places search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyPlace {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
}

impl NearbyPlace {
    /// Read every entry of `searchResults`.
    ///
    /// Results without that array (error responses, no matches) yield an
    /// empty list.
    pub fn list_from(result: &Value) -> Vec<NearbyPlace> {
        result
            .get("searchResults")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(Self::from_entry).collect())
            .unwrap_or_default()
    }

    fn from_entry(entry: &Value) -> Self {
        let fields = entry.get("fields");
        let field = |name: &str| fields.and_then(|f| f.get(name));

        Self {
            name: text_or(entry.get("name"), "name"),
            category: text_or(field("group_sic_code_name"), "category"),
            address: text_or(field("address"), "address"),
            city: text_or(field("city"), "city"),
        }
    }
}

fn text_or(value: Option<&Value>, label: &str) -> String {
    match value.and_then(Value::as_str).map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => format!("No {label}"),
    }
}

impl fmt::Display for NearbyPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}): {}, {}",
            self.name, self.category, self.address, self.city
        )
    }
}

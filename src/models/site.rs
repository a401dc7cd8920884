// src/models/site.rs

//! Site record data structure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The optional fields of a site record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteField {
    Category,
    Name,
    Address,
    Zipcode,
    Phone,
}

impl SiteField {
    /// Lower-case field name as it appears in the cache.
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteField::Category => "category",
            SiteField::Name => "name",
            SiteField::Address => "address",
            SiteField::Zipcode => "zipcode",
            SiteField::Phone => "phone",
        }
    }

    /// Placeholder used when the page has no value for this field.
    pub fn sentinel(&self) -> String {
        format!("No {}", self.as_str())
    }

    /// Map an extracted value to its final text.
    ///
    /// Surrounding whitespace is trimmed; missing or blank values become the
    /// sentinel.
    pub fn resolve(&self, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => self.sentinel(),
        }
    }
}

/// A single National Park Service site.
///
/// Every field holds either real text or its `"No <field>"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSiteRecord")]
pub struct SiteRecord {
    category: String,
    name: String,
    address: String,
    zipcode: String,
    phone: String,
}

/// Shape read back from the cache, before sentinel normalization.
#[derive(Deserialize)]
struct RawSiteRecord {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    zipcode: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl From<RawSiteRecord> for SiteRecord {
    fn from(raw: RawSiteRecord) -> Self {
        Self::new(raw.category, raw.name, raw.address, raw.zipcode, raw.phone)
    }
}

impl SiteRecord {
    /// Build a record from optional field values, substituting sentinels.
    pub fn new(
        category: Option<String>,
        name: Option<String>,
        address: Option<String>,
        zipcode: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            category: SiteField::Category.resolve(category),
            name: SiteField::Name.resolve(name),
            address: SiteField::Address.resolve(address),
            zipcode: SiteField::Zipcode.resolve(zipcode),
            phone: SiteField::Phone.resolve(phone),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Value of a field by tag.
    pub fn field(&self, field: SiteField) -> &str {
        match field {
            SiteField::Category => &self.category,
            SiteField::Name => &self.name,
            SiteField::Address => &self.address,
            SiteField::Zipcode => &self.zipcode,
            SiteField::Phone => &self.phone,
        }
    }

    /// Whether the field holds real data rather than its sentinel.
    pub fn is_present(&self, field: SiteField) -> bool {
        self.field(field) != field.sentinel()
    }

    /// Whether the site has a postal code to search around.
    pub fn has_zipcode(&self) -> bool {
        self.is_present(SiteField::Zipcode)
    }
}

impl fmt::Display for SiteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

// src/models/selectors.rs

//! CSS selectors for scraping nps.gov pages.

use serde::{Deserialize, Serialize};

/// CSS selectors for the state index, state pages and site pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSelectors {
    /// Navigation list holding one anchor per state on the index page
    pub state_nav: String,

    /// Anchor within the state navigation list
    pub state_link: String,

    /// Container of the park list on a state page
    pub site_list: String,

    /// Heading for each park inside the list container
    pub site_heading: String,

    /// Anchor inside a park heading
    pub site_link: String,

    /// Header region of a park page
    pub hero: String,

    /// Park name within the header region
    pub hero_name: String,

    /// Park designation (category) within the header region
    pub hero_designation: String,

    /// Contact region of a park page footer
    pub footer: String,

    /// City within the contact region
    pub locality: String,

    /// State within the contact region
    pub region: String,

    /// Postal code within the contact region
    pub postal_code: String,

    /// Phone number within the contact region
    pub telephone: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            state_nav: "ul.dropdown-menu.SearchBar-keywordSearch".to_string(),
            state_link: "a".to_string(),
            site_list: "ul#list_parks".to_string(),
            site_heading: "h3".to_string(),
            site_link: "a".to_string(),
            hero: "div.Hero-titleContainer".to_string(),
            hero_name: "a.Hero-title".to_string(),
            hero_designation: "span.Hero-designation".to_string(),
            footer: "div.ParkFooter-contact".to_string(),
            locality: r#"span[itemprop="addressLocality"]"#.to_string(),
            region: r#"span[itemprop="addressRegion"]"#.to_string(),
            postal_code: r#"span[itemprop="postalCode"]"#.to_string(),
            telephone: r#"span[itemprop="telephone"]"#.to_string(),
        }
    }
}

impl SiteSelectors {
    /// All selectors with their config names, for validation.
    pub fn entries(&self) -> [(&'static str, &str); 13] {
        [
            ("state_nav", &self.state_nav),
            ("state_link", &self.state_link),
            ("site_list", &self.site_list),
            ("site_heading", &self.site_heading),
            ("site_link", &self.site_link),
            ("hero", &self.hero),
            ("hero_name", &self.hero_name),
            ("hero_designation", &self.hero_designation),
            ("footer", &self.footer),
            ("locality", &self.locality),
            ("region", &self.region),
            ("postal_code", &self.postal_code),
            ("telephone", &self.telephone),
        ]
    }
}

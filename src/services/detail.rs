// src/services/detail.rs

//! Park page extraction.
//!
//! Park pages have two optional regions: the hero header (name,
//! designation) and the footer contact block (city, state, postal code,
//! phone). Either region may be missing; every field inside it then falls
//! back to its `"No <field>"` sentinel. Fields are read independently, so one
//! missing span never hides the others.

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::models::{SiteConfig, SiteRecord};
use crate::storage::{CacheKey, KeyValueStore, read_cached, write_cached};
use crate::utils::http::PageFetcher;
use crate::utils::{parse_selector, select_text};

/// Fields read from a park page before sentinel substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub category: Option<String>,
    pub name: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub zipcode: Option<String>,
    pub phone: Option<String>,
}

impl DetailFields {
    /// `"<city>, <state>"`, only when both parts are present.
    pub fn address(&self) -> Option<String> {
        match (&self.locality, &self.region) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            _ => None,
        }
    }

    pub fn into_record(self) -> SiteRecord {
        let address = self.address();
        SiteRecord::new(self.category, self.name, address, self.zipcode, self.phone)
    }
}

/// Extracts a `SiteRecord` from a park page.
#[derive(Debug, Clone)]
pub struct SiteDetailExtractor {
    hero: Selector,
    hero_name: Selector,
    hero_designation: Selector,
    footer: Selector,
    locality: Selector,
    region: Selector,
    postal_code: Selector,
    telephone: Selector,
}

impl SiteDetailExtractor {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let s = &site.selectors;
        Ok(Self {
            hero: parse_selector(&s.hero)?,
            hero_name: parse_selector(&s.hero_name)?,
            hero_designation: parse_selector(&s.hero_designation)?,
            footer: parse_selector(&s.footer)?,
            locality: parse_selector(&s.locality)?,
            region: parse_selector(&s.region)?,
            postal_code: parse_selector(&s.postal_code)?,
            telephone: parse_selector(&s.telephone)?,
        })
    }

    /// Return the record for a park page, fetching only on a cache miss.
    pub fn extract<F, S>(&self, fetcher: &F, cache: &mut S, site_url: &str) -> Result<SiteRecord>
    where
        F: PageFetcher + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let key = CacheKey::url(site_url)?;
        if let Some(record) = read_cached::<SiteRecord, _>(&*cache, &key)? {
            log::debug!("Using cache for park page {}", site_url);
            return Ok(record);
        }

        log::info!("Fetching park page {}", site_url);
        let document = fetcher.fetch_page(site_url)?;
        let record = self.parse(&document).into_record();

        write_cached(cache, key, &record)?;
        Ok(record)
    }

    /// Read every optional field from a parsed park page.
    pub fn parse(&self, document: &Html) -> DetailFields {
        let hero = document.select(&self.hero).next();
        let footer = document.select(&self.footer).next();

        if hero.is_none() {
            log::debug!("Park page has no header region");
        }
        if footer.is_none() {
            log::debug!("Park page has no contact region");
        }

        DetailFields {
            category: within(hero, &self.hero_designation),
            name: within(hero, &self.hero_name),
            locality: within(footer, &self.locality),
            region: within(footer, &self.region),
            zipcode: within(footer, &self.postal_code),
            phone: within(footer, &self.telephone),
        }
    }
}

fn within(region: Option<ElementRef<'_>>, selector: &Selector) -> Option<String> {
    region.and_then(|r| select_text(&r, selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::utils::http::stub::StubFetcher;

    const PARK_URL: &str = "https://www.nps.gov/isro/index.htm";

    const HERO: &str = r#"
        <div class="Hero-titleContainer clearfix">
          <a href="/isro/" class="Hero-title">Isle Royale</a>
          <div class="Hero-designationContainer">
            <span class="Hero-designation">National Park</span>
            <span class="Hero-location">Michigan</span>
          </div>
        </div>
    "#;

    fn footer(phone: bool) -> String {
        let phone = if phone {
            r#"<span itemprop="telephone" class="tel">(906) 482-0984</span>"#
        } else {
            ""
        };
        format!(
            r#"
            <div class="ParkFooter-contact">
              <p class="adr" itemprop="address">
                <span itemprop="streetAddress">800 East Lakeshore Drive</span>
                <span itemprop="addressLocality">Houghton</span>,
                <span itemprop="addressRegion" class="region">MI</span>
                <span itemprop="postalCode" class="postal-code">49931 </span>
              </p>
              {phone}
            </div>
            "#
        )
    }

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    fn extractor() -> SiteDetailExtractor {
        SiteDetailExtractor::new(&SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_full_page() {
        let record = extractor()
            .parse(&page(&format!("{HERO}{}", footer(true))))
            .into_record();

        assert_eq!(record.name(), "Isle Royale");
        assert_eq!(record.category(), "National Park");
        assert_eq!(record.address(), "Houghton, MI");
        assert_eq!(record.zipcode(), "49931");
        assert_eq!(record.phone(), "(906) 482-0984");
    }

    #[test]
    fn test_missing_phone_only_affects_phone() {
        let record = extractor()
            .parse(&page(&format!("{HERO}{}", footer(false))))
            .into_record();

        assert_eq!(record.phone(), "No phone");
        assert_eq!(record.name(), "Isle Royale");
        assert_eq!(record.address(), "Houghton, MI");
        assert_eq!(record.zipcode(), "49931");
    }

    #[test]
    fn test_missing_regions_yield_all_sentinels() {
        let record = extractor().parse(&page("<p>Maintenance</p>")).into_record();

        assert_eq!(record.name(), "No name");
        assert_eq!(record.category(), "No category");
        assert_eq!(record.address(), "No address");
        assert_eq!(record.zipcode(), "No zipcode");
        assert_eq!(record.phone(), "No phone");
    }

    #[test]
    fn test_empty_designation_and_half_address() {
        let html = r#"
            <div class="Hero-titleContainer">
              <a class="Hero-title">Father Marquette</a>
              <span class="Hero-designation"></span>
            </div>
            <div class="ParkFooter-contact">
              <span itemprop="addressLocality">St. Ignace</span>
            </div>
        "#;
        let fields = extractor().parse(&page(html));
        assert_eq!(fields.address(), None);

        let record = fields.into_record();
        assert_eq!(record.name(), "Father Marquette");
        assert_eq!(record.category(), "No category");
        assert_eq!(record.address(), "No address");
    }

    #[test]
    fn test_fields_outside_regions_are_ignored() {
        let html = r#"<span itemprop="postalCode">00000</span><a class="Hero-title">Stray</a>"#;
        let record = extractor().parse(&page(html)).into_record();
        assert_eq!(record.zipcode(), "No zipcode");
        assert_eq!(record.name(), "No name");
    }

    #[test]
    fn test_extract_is_idempotent_and_cached() {
        let body = format!("<html><body>{HERO}{}</body></html>", footer(true));
        let fetcher = StubFetcher::new().with(PARK_URL, &body);
        let mut cache = MemoryStore::new();
        let extractor = extractor();

        let first = extractor.extract(&fetcher, &mut cache, PARK_URL).unwrap();
        let second = extractor.extract(&fetcher, &mut cache, PARK_URL).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        assert_eq!(fetcher.request_count(), 1);
    }

    #[test]
    fn test_fetch_failure_caches_nothing() {
        let fetcher = StubFetcher::new();
        let mut cache = MemoryStore::new();

        let err = extractor()
            .extract(&fetcher, &mut cache, PARK_URL)
            .unwrap_err();
        assert!(err.is_network());
        assert!(cache.is_empty());
    }
}

// src/pipeline/directory.rs

//! Cache-backed site directory.

use crate::error::{AppError, Result};
use crate::models::{Config, NearbyPlacesResult, SiteRecord, StateIndex};
use crate::services::{
    NearbyPlacesClient, SiteDetailExtractor, SiteListResolver, StateIndexResolver,
};
use crate::storage::{FileStore, KeyValueStore};
use crate::utils::http::{HttpFetcher, PageFetcher};

/// Resolves states to park records and parks to nearby places.
///
/// Every stage reads the cache first, so repeating a lookup performs no
/// network requests.
pub struct SiteDirectory<F, S> {
    fetcher: F,
    cache: S,
    states: StateIndexResolver,
    sites: SiteListResolver,
    details: SiteDetailExtractor,
    places: Option<NearbyPlacesClient>,
}

impl SiteDirectory<HttpFetcher, FileStore> {
    /// Live directory: HTTP fetcher and the configured cache file.
    pub fn open(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        let cache = FileStore::open(&config.cache.path)?;
        log::debug!(
            "Opened cache {} with {} entries",
            cache.path().display(),
            cache.len()
        );
        Self::new(config, fetcher, cache)
    }
}

impl<F, S> SiteDirectory<F, S>
where
    F: PageFetcher,
    S: KeyValueStore,
{
    /// Build a directory over any fetcher and store.
    ///
    /// The places client is set up only when `places.api_key` is non-blank.
    pub fn new(config: &Config, fetcher: F, cache: S) -> Result<Self> {
        let places = match config.places.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {
                Some(NearbyPlacesClient::new(&config.places, key)?)
            }
            _ => None,
        };

        Ok(Self {
            fetcher,
            cache,
            states: StateIndexResolver::new(&config.site)?,
            sites: SiteListResolver::new(&config.site)?,
            details: SiteDetailExtractor::new(&config.site)?,
            places,
        })
    }

    /// Replace the places client.
    pub fn with_places(mut self, client: NearbyPlacesClient) -> Self {
        self.places = Some(client);
        self
    }

    pub fn cache(&self) -> &S {
        &self.cache
    }

    /// State name → state page URL for every state on the home page.
    pub fn states(&mut self) -> Result<StateIndex> {
        self.states.resolve(&self.fetcher, &mut self.cache)
    }

    /// State page URL for a state name, matched case-insensitively.
    pub fn state_url(&mut self, name: &str) -> Result<String> {
        let wanted = name.trim().to_lowercase();
        self.states()?
            .remove(&wanted)
            .ok_or(AppError::UnknownRegion(wanted))
    }

    /// All park records for a state, in the order the state page lists them.
    ///
    /// Fails as a whole if any park page cannot be fetched.
    pub fn resolve_region(&mut self, name: &str) -> Result<Vec<SiteRecord>> {
        let state_url = self.state_url(name)?;
        let site_urls = self.sites.resolve(&self.fetcher, &mut self.cache, &state_url)?;

        site_urls
            .iter()
            .map(|url| self.details.extract(&self.fetcher, &mut self.cache, url))
            .collect()
    }

    /// Places near a park.
    ///
    /// Returns `Ok(None)` without any request when the park has no zipcode.
    pub fn fetch_nearby(&mut self, record: &SiteRecord) -> Result<Option<NearbyPlacesResult>> {
        if !record.has_zipcode() {
            log::info!("{} has no zipcode; skipping nearby search", record.name());
            return Ok(None);
        }

        let places = self
            .places
            .as_ref()
            .ok_or_else(|| AppError::config("no places API key configured"))?;
        places
            .search(&self.fetcher, &mut self.cache, record.zipcode())
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::utils::http::stub::StubFetcher;

    const INDEX_URL: &str = "https://www.nps.gov/index.htm";
    const STATE_URL: &str = "https://www.nps.gov/state/mi/index.htm";
    const ENDPOINT: &str = "http://www.mapquestapi.com/search/v2/radius";

    fn fixtures() -> StubFetcher {
        StubFetcher::new()
            .with(
                INDEX_URL,
                r#"<ul class="dropdown-menu SearchBar-keywordSearch">
                     <li><a href="/state/mi/index.htm">Michigan</a></li>
                   </ul>"#,
            )
            .with(
                STATE_URL,
                r#"<ul id="list_parks">
                     <li><h3><a href="/isro/">Isle Royale</a></h3></li>
                     <li><h3><a href="/mapr/">Motor Cities</a></h3></li>
                   </ul>"#,
            )
            .with(
                "https://www.nps.gov/isro/index.htm",
                r#"<div class="Hero-titleContainer">
                     <a class="Hero-title">Isle Royale</a>
                     <span class="Hero-designation">National Park</span>
                   </div>
                   <div class="ParkFooter-contact">
                     <span itemprop="addressLocality">Houghton</span>
                     <span itemprop="addressRegion">MI</span>
                     <span itemprop="postalCode">49931</span>
                   </div>"#,
            )
            .with(
                "https://www.nps.gov/mapr/index.htm",
                r#"<div class="Hero-titleContainer">
                     <a class="Hero-title">Motor Cities</a>
                     <span class="Hero-designation">National Heritage Area</span>
                   </div>"#,
            )
            .with(ENDPOINT, r#"{"searchResults": []}"#)
    }

    fn directory(fetcher: &StubFetcher) -> SiteDirectory<&StubFetcher, MemoryStore> {
        let client = NearbyPlacesClient::new(&Config::default().places, "k").unwrap();
        SiteDirectory::new(&Config::default(), fetcher, MemoryStore::new())
            .unwrap()
            .with_places(client)
    }

    #[test]
    fn test_state_lookup_is_case_insensitive() {
        let fetcher = fixtures();
        let mut dir = directory(&fetcher);
        assert_eq!(dir.state_url("  MICHIGAN ").unwrap(), STATE_URL);
    }

    #[test]
    fn test_unknown_state() {
        let fetcher = fixtures();
        let mut dir = directory(&fetcher);
        let err = dir.resolve_region("atlantis").unwrap_err();
        assert!(matches!(err, AppError::UnknownRegion(name) if name == "atlantis"));
    }

    #[test]
    fn test_nearby_skips_records_without_zipcode() {
        let fetcher = fixtures();
        let mut dir = directory(&fetcher);
        let sites = dir.resolve_region("michigan").unwrap();
        let before = fetcher.request_count();

        assert_eq!(sites[1].zipcode(), "No zipcode");
        assert!(dir.fetch_nearby(&sites[1]).unwrap().is_none());
        assert_eq!(fetcher.request_count(), before);

        assert!(dir.fetch_nearby(&sites[0]).unwrap().is_some());
        assert_eq!(fetcher.request_count(), before + 1);
        assert_eq!(fetcher.requested_urls().last().unwrap(), ENDPOINT);
    }

    #[test]
    fn test_nearby_without_key_is_config_error() {
        let fetcher = fixtures();
        let mut dir = SiteDirectory::new(&Config::default(), &fetcher, MemoryStore::new()).unwrap();
        let record = SiteRecord::new(None, None, None, Some("49931".into()), None);

        assert!(matches!(
            dir.fetch_nearby(&record).unwrap_err(),
            AppError::Config(_)
        ));
        assert_eq!(fetcher.request_count(), 0);
    }

    #[test]
    fn test_blank_key_still_resolves_region() {
        let fetcher = fixtures();
        let config: Config = toml::from_str("[places]\napi_key = \"\"\n").unwrap();
        config.validate().unwrap();

        let mut dir = SiteDirectory::new(&config, &fetcher, MemoryStore::new()).unwrap();
        let sites = dir.resolve_region("michigan").unwrap();
        assert_eq!(sites.len(), 2);

        assert!(matches!(
            dir.fetch_nearby(&sites[0]).unwrap_err(),
            AppError::Config(_)
        ));
    }

    #[test]
    fn test_failed_park_page_fails_region() {
        let fetcher = StubFetcher::new()
            .with(
                INDEX_URL,
                r#"<ul class="dropdown-menu SearchBar-keywordSearch">
                     <li><a href="/state/mi/index.htm">Michigan</a></li>
                   </ul>"#,
            )
            .with(
                STATE_URL,
                r#"<ul id="list_parks"><h3><a href="/gone/">Gone</a></h3></ul>"#,
            );
        let mut dir = directory(&fetcher);

        assert!(dir.resolve_region("michigan").unwrap_err().is_network());
    }
}

// src/services/places.rs

//! Nearby places radius search.

use std::fmt;

use crate::error::{AppError, Result};
use crate::models::{NearbyPlacesResult, PlacesConfig};
use crate::storage::{CacheKey, KeyValueStore, read_cached, write_cached};
use crate::utils::http::PageFetcher;

/// Client for the radius search API.
///
/// Results are cached under the postal code they were searched around.
#[derive(Clone)]
pub struct NearbyPlacesClient {
    endpoint: String,
    api_key: String,
    radius: u32,
    max_matches: u32,
    ambiguities: String,
    out_format: String,
}

impl NearbyPlacesClient {
    /// Create a client with an explicit API key.
    pub fn new(config: &PlacesConfig, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::config("places API key is empty"));
        }

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key,
            radius: config.radius,
            max_matches: config.max_matches,
            ambiguities: config.ambiguities.clone(),
            out_format: config.out_format.clone(),
        })
    }

    fn query(&self, origin: &str) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.api_key.clone()),
            ("origin", origin.to_string()),
            ("radius", self.radius.to_string()),
            ("maxMatches", self.max_matches.to_string()),
            ("ambiguities", self.ambiguities.clone()),
            ("outFormat", self.out_format.clone()),
        ]
    }

    /// Search around a postal code, fetching only on a cache miss.
    pub fn search<F, S>(
        &self,
        fetcher: &F,
        cache: &mut S,
        postal_code: &str,
    ) -> Result<NearbyPlacesResult>
    where
        F: PageFetcher + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let key = CacheKey::postal_code(postal_code)?;
        if let Some(result) = read_cached::<NearbyPlacesResult, _>(&*cache, &key)? {
            log::debug!("Using cache for places near {}", key);
            return Ok(result);
        }

        log::info!("Fetching places near {}", key);
        let result = fetcher.fetch_json(&self.endpoint, &self.query(key.as_str()))?;

        write_cached(cache, key, &result)?;
        Ok(result)
    }
}

impl fmt::Debug for NearbyPlacesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NearbyPlacesClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("radius", &self.radius)
            .field("max_matches", &self.max_matches)
            .field("ambiguities", &self.ambiguities)
            .field("out_format", &self.out_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::utils::http::stub::StubFetcher;

    const ENDPOINT: &str = "http://www.mapquestapi.com/search/v2/radius";

    const RESPONSE: &str = r#"{
        "resultsCount": 1,
        "searchResults": [
            { "name": "Ranger III Dock", "fields": { "city": "Houghton" } }
        ]
    }"#;

    fn client() -> NearbyPlacesClient {
        NearbyPlacesClient::new(&PlacesConfig::default(), "test-key").unwrap()
    }

    #[test]
    fn test_query_parameters() {
        let fetcher = StubFetcher::new().with(ENDPOINT, RESPONSE);
        let mut cache = MemoryStore::new();

        client().search(&fetcher, &mut cache, "49931").unwrap();

        let query = fetcher.last_query();
        let expected = [
            ("key", "test-key"),
            ("origin", "49931"),
            ("radius", "10"),
            ("maxMatches", "10"),
            ("ambiguities", "ignore"),
            ("outFormat", "json"),
        ];
        assert_eq!(query.len(), expected.len());
        for ((k, v), (ek, ev)) in query.iter().zip(expected) {
            assert_eq!((k.as_str(), v.as_str()), (ek, ev));
        }
    }

    #[test]
    fn test_result_passes_through_and_is_cached() {
        let fetcher = StubFetcher::new().with(ENDPOINT, RESPONSE);
        let mut cache = MemoryStore::new();
        let client = client();

        let first = client.search(&fetcher, &mut cache, "49931").unwrap();
        let second = client.search(&fetcher, &mut cache, "49931").unwrap();

        assert_eq!(first, serde_json::from_str::<serde_json::Value>(RESPONSE).unwrap());
        assert_eq!(first, second);
        assert_eq!(fetcher.request_count(), 1);
        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["49931"]);
    }

    #[test]
    fn test_sentinel_zipcode_never_reaches_network() {
        let fetcher = StubFetcher::new().with(ENDPOINT, RESPONSE);
        let mut cache = MemoryStore::new();

        let err = client()
            .search(&fetcher, &mut cache, "No zipcode")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidKey { .. }));
        assert_eq!(fetcher.request_count(), 0);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(NearbyPlacesClient::new(&PlacesConfig::default(), " ").is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("test-key"));
    }
}

// src/services/states.rs

//! State index resolution.
//!
//! Reads the state navigation menu on the nps.gov home page into a
//! state name → state page URL mapping.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{SiteConfig, StateIndex};
use crate::storage::{CacheKey, KeyValueStore, read_cached, write_cached};
use crate::utils::http::PageFetcher;
use crate::utils::{element_text, parse_selector, url::join_path};

/// Resolves state names to state page URLs.
#[derive(Debug, Clone)]
pub struct StateIndexResolver {
    index_url: String,
    base_url: String,
    nav_css: String,
    nav: Selector,
    link: Selector,
}

impl StateIndexResolver {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            index_url: site.index_url(),
            base_url: site.base_url.clone(),
            nav_css: site.selectors.state_nav.clone(),
            nav: parse_selector(&site.selectors.state_nav)?,
            link: parse_selector(&site.selectors.state_link)?,
        })
    }

    /// URL of the page the index is read from; also its cache key.
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Return the state index, fetching the home page only on a cache miss.
    pub fn resolve<F, S>(&self, fetcher: &F, cache: &mut S) -> Result<StateIndex>
    where
        F: PageFetcher + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let key = CacheKey::url(&self.index_url)?;
        if let Some(index) = read_cached::<StateIndex, _>(&*cache, &key)? {
            log::debug!("Using cache for state index {}", self.index_url);
            return Ok(index);
        }

        log::info!("Fetching state index {}", self.index_url);
        let document = fetcher.fetch_page(&self.index_url)?;
        let index = self.parse(&document)?;

        write_cached(cache, key, &index)?;
        log::info!("Cached {} states", index.len());
        Ok(index)
    }

    /// Extract the mapping from a parsed home page.
    pub fn parse(&self, document: &Html) -> Result<StateIndex> {
        let nav = document
            .select(&self.nav)
            .next()
            .ok_or_else(|| AppError::structure(&self.index_url, &self.nav_css))?;

        let mut index = StateIndex::new();
        for anchor in nav.select(&self.link) {
            let name = element_text(&anchor).to_lowercase();
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if name.is_empty() || href.trim().is_empty() {
                continue;
            }
            index.insert(name, join_path(&self.base_url, href.trim()));
        }
        Ok(index)
    }
}

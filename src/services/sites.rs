// src/services/sites.rs

//! Park list resolution for one state page.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::SiteConfig;
use crate::storage::{CacheKey, KeyValueStore, read_cached, write_cached};
use crate::utils::http::PageFetcher;
use crate::utils::{parse_selector, url::detail_url};

/// Resolves a state page URL to the park page URLs it lists.
#[derive(Debug, Clone)]
pub struct SiteListResolver {
    base_url: String,
    index_file: String,
    list_css: String,
    link_css: String,
    list: Selector,
    heading: Selector,
    link: Selector,
}

impl SiteListResolver {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            base_url: site.base_url.clone(),
            index_file: site.detail_index_file.clone(),
            list_css: site.selectors.site_list.clone(),
            link_css: format!("{} {}", site.selectors.site_heading, site.selectors.site_link),
            list: parse_selector(&site.selectors.site_list)?,
            heading: parse_selector(&site.selectors.site_heading)?,
            link: parse_selector(&site.selectors.site_link)?,
        })
    }

    /// Return the park page URLs for a state in page order.
    pub fn resolve<F, S>(
        &self,
        fetcher: &F,
        cache: &mut S,
        state_url: &str,
    ) -> Result<Vec<String>>
    where
        F: PageFetcher + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let key = CacheKey::url(state_url)?;
        if let Some(urls) = read_cached::<Vec<String>, _>(&*cache, &key)? {
            log::debug!("Using cache for state page {}", state_url);
            return Ok(urls);
        }

        log::info!("Fetching state page {}", state_url);
        let document = fetcher.fetch_page(state_url)?;
        let urls = self.parse(&document, state_url)?;

        write_cached(cache, key, &urls)?;
        log::info!("Cached {} parks for {}", urls.len(), state_url);
        Ok(urls)
    }

    /// Extract park page URLs from a parsed state page.
    ///
    /// Every heading in the list must carry a link; one without fails the
    /// whole page.
    pub fn parse(&self, document: &Html, state_url: &str) -> Result<Vec<String>> {
        let list = document
            .select(&self.list)
            .next()
            .ok_or_else(|| AppError::structure(state_url, &self.list_css))?;

        list.select(&self.heading)
            .map(|heading| {
                heading
                    .select(&self.link)
                    .find_map(|a| a.value().attr("href"))
                    .map(str::trim)
                    .filter(|href| !href.is_empty())
                    .map(|href| detail_url(&self.base_url, href, &self.index_file))
                    .ok_or_else(|| AppError::structure(state_url, &self.link_css))
            })
            .collect()
    }
}

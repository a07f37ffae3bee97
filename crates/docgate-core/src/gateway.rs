//! Gateway operations: fetch-index, fetch-page, and search.
//!
//! Each call resolves the site, computes the locator, and performs exactly
//! one fetch. Nothing is cached between calls.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::locator;
use crate::search::{self, SearchResult};
use crate::site::{self, SiteDescriptor, SiteKey};

/// A fetched document and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedDocument {
    pub site: SiteKey,
    pub locator: String,
    pub content: String,
}

/// Outcome of a search over a site's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSearch {
    pub site: SiteKey,
    pub locator: String,
    pub query: String,
    pub case_insensitive: bool,
    pub result: SearchResult,
}

/// Registry entry as listed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteListing {
    #[serde(flatten)]
    pub descriptor: &'static SiteDescriptor,
    pub default: bool,
}

/// Every registered site in registration order, flagging the default.
#[must_use]
pub fn list_sites() -> Vec<SiteListing> {
    site::all()
        .map(|descriptor| SiteListing {
            descriptor,
            default: descriptor.key == SiteKey::DEFAULT,
        })
        .collect()
}

/// Documentation gateway over a fetch capability.
#[derive(Debug, Clone)]
pub struct DocGateway<F> {
    fetcher: F,
}

impl<F: Fetcher> DocGateway<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the index document of a site.
    ///
    /// # Errors
    ///
    /// Fails on an unknown site key or when the fetch fails.
    pub async fn fetch_index(&self, site: Option<&str>) -> Result<FetchedDocument> {
        let site = site::resolve_or_default(site)?;
        let locator = locator::index_locator(site);
        self.fetch_document(site, locator).await
    }

    /// Fetch a page of a site from a full URL or a rooted or bare path.
    ///
    /// # Errors
    ///
    /// Fails on an unknown site key or when the fetch fails.
    pub async fn fetch_page(&self, site: Option<&str>, target: &str) -> Result<FetchedDocument> {
        let site = site::resolve_or_default(site)?;
        let locator = locator::page_locator(site, target);
        self.fetch_document(site, locator).await
    }

    /// Search a site's index for lines containing `query`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown site key or when fetching the index fails.
    pub async fn search(
        &self,
        site: Option<&str>,
        query: &str,
        case_insensitive: bool,
    ) -> Result<SiteSearch> {
        let index = self.fetch_index(site).await?;
        let result = search::search(&index.content, query, case_insensitive);
        debug!(
            site = %index.site,
            query,
            case_insensitive,
            matches = result.len(),
            "searched index"
        );
        Ok(SiteSearch {
            site: index.site,
            locator: index.locator,
            query: query.to_string(),
            case_insensitive,
            result,
        })
    }

    async fn fetch_document(
        &self,
        site: &'static SiteDescriptor,
        locator: String,
    ) -> Result<FetchedDocument> {
        debug!(site = %site.key, %locator, "fetching");
        let content = self.fetcher.fetch(&locator).await?;
        Ok(FetchedDocument {
            site: site.key,
            locator,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::{FetchError, FetchFailure, GatewayError};

    #[derive(Default)]
    struct StubFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn with(mut self, locator: &str, body: &str) -> Self {
            self.pages.insert(locator.to_string(), body.to_string());
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch(&self, locator: &str) -> std::result::Result<String, FetchError> {
            self.requested.lock().unwrap().push(locator.to_string());
            self.pages
                .get(locator)
                .cloned()
                .ok_or_else(|| FetchError::status(locator, 404))
        }
    }

    fn gateway() -> DocGateway<StubFetcher> {
        DocGateway::new(
            StubFetcher::default()
                .with(
                    "https://modelcontextprotocol.io/llms.txt",
                    "# MCP\n- [Tools](https://modelcontextprotocol.io/docs/tools.md)\n- [Prompts](/docs/prompts.md)",
                )
                .with(
                    "https://ai-sdk.dev/llms.txt",
                    "alpha\nbeta\nalpha\ngamma",
                )
                .with("https://ai-sdk.dev/docs/intro", "Intro page"),
        )
    }

    #[tokio::test]
    async fn fetch_index_uses_default_site() {
        let gw = gateway();
        let doc = gw.fetch_index(None).await.unwrap();
        assert_eq!(doc.site, SiteKey::Mcp);
        assert_eq!(doc.locator, "https://modelcontextprotocol.io/llms.txt");
        assert!(doc.content.starts_with("# MCP"));
    }

    #[tokio::test]
    async fn fetch_page_resolves_relative_targets() {
        let gw = gateway();
        let bare = gw.fetch_page(Some("ai-sdk"), "docs/intro").await.unwrap();
        let rooted = gw.fetch_page(Some("ai-sdk"), "/docs/intro").await.unwrap();
        assert_eq!(bare, rooted);
        assert_eq!(bare.content, "Intro page");
    }

    #[tokio::test]
    async fn fetch_page_passes_absolute_urls_through() {
        let gw = gateway();
        let doc = gw
            .fetch_page(Some("langgraph"), "https://ai-sdk.dev/docs/intro")
            .await
            .unwrap();
        assert_eq!(doc.site, SiteKey::Langgraph);
        assert_eq!(doc.locator, "https://ai-sdk.dev/docs/intro");
    }

    #[tokio::test]
    async fn unknown_site_fails_without_fetching() {
        let gw = gateway();
        let err = gw.fetch_index(Some("rustdoc")).await.unwrap_err();
        match err {
            GatewayError::UnknownSite(e) => {
                assert_eq!(e.key, "rustdoc");
                assert_eq!(e.valid_keys, ["mcp", "ai-sdk", "langgraph"]);
            }
            other => panic!("expected unknown site, got {other:?}"),
        }
        assert!(gw.fetcher().requested().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_carries_locator() {
        let gw = gateway();
        let err = gw.fetch_page(None, "missing").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Fetch(FetchError {
                locator: "https://modelcontextprotocol.io/missing".to_string(),
                failure: FetchFailure::Status(404),
            })
        );
    }

    #[tokio::test]
    async fn search_scans_site_index() {
        let gw = gateway();
        let found = gw.search(Some("ai-sdk"), "ALPHA", true).await.unwrap();
        assert_eq!(found.locator, "https://ai-sdk.dev/llms.txt");
        let indices: Vec<usize> = found.result.iter().map(|m| m.line_index).collect();
        assert_eq!(indices, [0, 2]);

        let none = gw.search(Some("ai-sdk"), "ALPHA", false).await.unwrap();
        assert!(none.result.is_empty());
    }

    #[tokio::test]
    async fn each_call_fetches_once() {
        let gw = gateway();
        gw.search(None, "tools", true).await.unwrap();
        gw.search(None, "tools", true).await.unwrap();
        assert_eq!(gw.fetcher().requested().len(), 2);
    }

    #[test]
    fn sites_flag_the_default() {
        let listing = list_sites();
        assert_eq!(listing.len(), 3);
        let defaults: Vec<SiteKey> = listing
            .iter()
            .filter(|s| s.default)
            .map(|s| s.descriptor.key)
            .collect();
        assert_eq!(defaults, [SiteKey::DEFAULT]);

        let json = serde_json::to_value(&listing[0]).unwrap();
        assert_eq!(json["key"], "mcp");
        assert_eq!(json["default"], true);
    }
}

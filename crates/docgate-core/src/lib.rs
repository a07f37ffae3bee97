//! # docgate-core
//!
//! Site abstraction and search core for the docgate documentation gateway.
//!
//! - [`site`]: the closed registry of documentation sites ([`SiteKey`], [`SiteDescriptor`])
//! - [`locator`]: resolving index and page locators against a site
//! - [`search`]: line search with neighboring-line context ([`SearchResult`])
//! - [`Fetcher`]: the seam to the network fetch capability
//! - [`DocGateway`]: fetch-index, fetch-page, and search operations
//! - Error taxonomy ([`GatewayError`], [`UnknownSiteError`], [`FetchError`])

pub mod error;
pub mod fetch;
pub mod gateway;
pub mod locator;
pub mod search;
pub mod site;

pub use error::{FetchError, FetchFailure, GatewayError, Result, UnknownSiteError};
pub use fetch::Fetcher;
pub use gateway::{DocGateway, FetchedDocument, SiteListing, SiteSearch};
pub use search::{MatchContext, SearchResult};
pub use site::{SiteDescriptor, SiteKey};

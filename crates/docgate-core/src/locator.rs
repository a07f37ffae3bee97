//! Locator resolution: turning a site plus a user-supplied target into the
//! exact address handed to the fetch capability.
//!
//! No well-formedness checks happen here. A malformed locator surfaces as a
//! fetch failure downstream.

use crate::site::SiteDescriptor;

/// Shape of a raw page target, classified in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget<'a> {
    /// Starts with `http://` or `https://`; used verbatim.
    Absolute(&'a str),
    /// Starts with `/`; appended to the base location.
    Rooted(&'a str),
    /// Anything else, including the empty string; joined with a `/`.
    Bare(&'a str),
}

impl<'a> PageTarget<'a> {
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            PageTarget::Absolute(raw)
        } else if raw.starts_with('/') {
            PageTarget::Rooted(raw)
        } else {
            PageTarget::Bare(raw)
        }
    }
}

/// Locator of the site's index document.
#[must_use]
pub fn index_locator(site: &SiteDescriptor) -> String {
    format!("{}{}", site.base_location, site.index_locator)
}

/// Locator of a page on `site`, from a full URL or a rooted or bare path.
#[must_use]
pub fn page_locator(site: &SiteDescriptor, raw_target: &str) -> String {
    match PageTarget::classify(raw_target) {
        PageTarget::Absolute(url) => url.to_string(),
        PageTarget::Rooted(path) => format!("{}{}", site.base_location, path),
        PageTarget::Bare(path) => format!("{}/{}", site.base_location, path),
    }
}

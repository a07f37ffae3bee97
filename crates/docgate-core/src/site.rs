//! Site registry: the closed set of documentation sites docgate serves.
//!
//! Each [`SiteKey`] maps to exactly one static [`SiteDescriptor`] through a
//! total `match`, so an unknown site can only arise when a key arrives as a
//! string from outside (tool input, command line). [`resolve`] handles that
//! case and reports the valid keys.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UnknownSiteError;

/// Logical identifier of a documentation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteKey {
    Mcp,
    AiSdk,
    Langgraph,
}

impl SiteKey {
    /// Every registered site, in registration order.
    pub const ALL: [SiteKey; 3] = [SiteKey::Mcp, SiteKey::AiSdk, SiteKey::Langgraph];

    /// Site used when a caller omits the site parameter.
    pub const DEFAULT: SiteKey = SiteKey::Mcp;

    /// The key string accepted on input.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SiteKey::Mcp => "mcp",
            SiteKey::AiSdk => "ai-sdk",
            SiteKey::Langgraph => "langgraph",
        }
    }

    /// The static descriptor for this site.
    #[must_use]
    pub fn descriptor(self) -> &'static SiteDescriptor {
        match self {
            SiteKey::Mcp => &MCP,
            SiteKey::AiSdk => &AI_SDK,
            SiteKey::Langgraph => &LANGGRAPH,
        }
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteKey {
    type Err = UnknownSiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSiteError {
                key: s.to_string(),
                valid_keys: list_valid_keys().iter().map(|k| k.to_string()).collect(),
            })
    }
}

/// Static description of where a site's documentation lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDescriptor {
    pub key: SiteKey,
    pub display_name: &'static str,
    /// Scheme and host (plus optional path prefix), never with a trailing slash.
    pub base_location: &'static str,
    /// Path of the site index, always starting with `/`.
    pub index_locator: &'static str,
}

impl SiteDescriptor {
    /// Check the descriptor invariants the locator resolver relies on.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_location.is_empty() {
            return Err(format!("site '{}': empty base location", self.key));
        }
        if self.base_location.ends_with('/') {
            return Err(format!(
                "site '{}': base location '{}' has a trailing slash",
                self.key, self.base_location
            ));
        }
        if !self.index_locator.starts_with('/') {
            return Err(format!(
                "site '{}': index locator '{}' must start with '/'",
                self.key, self.index_locator
            ));
        }
        Ok(())
    }
}

static MCP: SiteDescriptor = SiteDescriptor {
    key: SiteKey::Mcp,
    display_name: "Model Context Protocol",
    base_location: "https://modelcontextprotocol.io",
    index_locator: "/llms.txt",
};

static AI_SDK: SiteDescriptor = SiteDescriptor {
    key: SiteKey::AiSdk,
    display_name: "Vercel AI SDK",
    base_location: "https://ai-sdk.dev",
    index_locator: "/llms.txt",
};

static LANGGRAPH: SiteDescriptor = SiteDescriptor {
    key: SiteKey::Langgraph,
    display_name: "LangGraph",
    base_location: "https://langchain-ai.github.io/langgraph",
    index_locator: "/llms.txt",
};

/// Look up a site by its key string.
///
/// # Errors
///
/// Returns [`UnknownSiteError`] carrying the valid keys when `key` is not registered.
pub fn resolve(key: &str) -> Result<&'static SiteDescriptor, UnknownSiteError> {
    key.parse::<SiteKey>().map(SiteKey::descriptor)
}

/// Look up a site, falling back to [`SiteKey::DEFAULT`] when no key is given.
///
/// # Errors
///
/// Returns [`UnknownSiteError`] when a key is given but not registered.
pub fn resolve_or_default(key: Option<&str>) -> Result<&'static SiteDescriptor, UnknownSiteError> {
    match key {
        Some(key) => resolve(key),
        None => Ok(SiteKey::DEFAULT.descriptor()),
    }
}

/// Registered key strings, in registration order.
#[must_use]
pub fn list_valid_keys() -> [&'static str; 3] {
    SiteKey::ALL.map(SiteKey::as_str)
}

/// Every registered descriptor, in registration order.
pub fn all() -> impl Iterator<Item = &'static SiteDescriptor> {
    SiteKey::ALL.into_iter().map(SiteKey::descriptor)
}

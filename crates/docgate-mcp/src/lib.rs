//! # docgate-mcp
//!
//! MCP (Model Context Protocol) server for the docgate documentation gateway.
//!
//! Exposes read-only documentation access as MCP tools:
//! - `list_doc_sites`: Registered sites and the default
//! - `fetch_docs_index`: A site's llms.txt index
//! - `fetch_docs_page`: A page by URL or site-relative path
//! - `search_docs`: Line search over a site's index with context

pub mod config;
pub mod envelope;
pub mod tools;

pub use config::{ConfigError, DocgateConfig, SearchConfig};
pub use tools::DocgateMcpService;

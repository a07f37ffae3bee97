//! MCP tool definitions for docgate (read-only).

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;
use serde_json::json;

use docgate_core::{gateway, site, DocGateway, Fetcher};
use docgate_fetch::{ClientBuildError, HttpFetcher};

use crate::config::DocgateConfig;
use crate::envelope;

/// docgate MCP server exposing documentation sites as tools.
#[derive(Debug, Clone)]
pub struct DocgateMcpService<F = HttpFetcher> {
    config: DocgateConfig,
    gateway: DocGateway<F>,
    tool_router: ToolRouter<Self>,
}

impl DocgateMcpService {
    /// Create a server with an HTTP fetcher built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client cannot be built.
    pub fn new(config: DocgateConfig) -> Result<Self, ClientBuildError> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetcher + 'static> DocgateMcpService<F> {
    /// Create a server over an existing fetch capability.
    pub fn with_fetcher(config: DocgateConfig, fetcher: F) -> Self {
        Self {
            config,
            gateway: DocGateway::new(fetcher),
            tool_router: Self::tool_router(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DocgateConfig {
        &self.config
    }

    /// Names of the registered tools.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

// === Tool request types ===

/// Request to fetch a site's index.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FetchIndexRequest {
    /// Documentation site: "mcp", "ai-sdk", or "langgraph" (default: "mcp")
    #[serde(default)]
    #[schemars(schema_with = "site_schema")]
    pub site: Option<String>,
}

/// Request to fetch a documentation page.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FetchPageRequest {
    /// Documentation site: "mcp", "ai-sdk", or "langgraph" (default: "mcp")
    #[serde(default)]
    #[schemars(schema_with = "site_schema")]
    pub site: Option<String>,
    /// Full URL, or a path relative to the site (e.g., "/docs/intro" or "docs/intro")
    pub url: String,
}

/// Request to search a site's index.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Documentation site: "mcp", "ai-sdk", or "langgraph" (default: "mcp")
    #[serde(default)]
    #[schemars(schema_with = "site_schema")]
    pub site: Option<String>,
    /// Text to find; every index line containing it is returned with its neighbors
    pub query: String,
    /// Ignore case when matching (default: true)
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
    /// Maximum matches to return (default: server setting)
    pub limit: Option<usize>,
}

fn default_case_insensitive() -> bool {
    true
}

/// Advertise the registered keys; the value is still parsed as a string so
/// an unregistered key reaches the gateway and fails there.
fn site_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "enum": site::list_valid_keys(),
    })
}

#[tool_router]
impl<F: Fetcher + 'static> DocgateMcpService<F> {
    /// List the documentation sites this server can reach.
    #[tool(description = "List the available documentation sites, their base URLs, and which one is the default")]
    fn list_doc_sites(&self) -> Result<CallToolResult, McpError> {
        Ok(envelope::json(&json!(gateway::list_sites())))
    }

    /// Fetch a site's index (its llms.txt).
    #[tool(
        description = "Fetch the documentation index (llms.txt) of a site, listing its pages and summaries"
    )]
    async fn fetch_docs_index(
        &self,
        Parameters(req): Parameters<FetchIndexRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(match self.gateway.fetch_index(req.site.as_deref()).await {
            Ok(doc) => envelope::text(doc.content),
            Err(e) => envelope::error(&e),
        })
    }

    /// Fetch one documentation page.
    #[tool(
        description = "Fetch a documentation page by full URL or by path relative to the site's base URL"
    )]
    async fn fetch_docs_page(
        &self,
        Parameters(req): Parameters<FetchPageRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(
            match self.gateway.fetch_page(req.site.as_deref(), &req.url).await {
                Ok(doc) => envelope::text(doc.content),
                Err(e) => envelope::error(&e),
            },
        )
    }

    /// Search a site's index line by line.
    #[tool(
        description = "Search a site's documentation index; returns each matching line with the lines before and after it"
    )]
    async fn search_docs(
        &self,
        Parameters(req): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let limit = self.config.match_limit(req.limit);
        Ok(
            match self
                .gateway
                .search(req.site.as_deref(), &req.query, req.case_insensitive)
                .await
            {
                Ok(found) => envelope::json(&envelope::search_body(found, limit)),
                Err(e) => envelope::error(&e),
            },
        )
    }
}

#[tool_handler]
impl<F: Fetcher + 'static> ServerHandler for DocgateMcpService<F> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "docgate documentation gateway. List sites, fetch a site's llms.txt index, \
                 fetch individual pages, or search an index for matching lines."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

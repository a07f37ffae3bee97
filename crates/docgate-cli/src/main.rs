//! docgate CLI: documentation gateway for LLM agents
//!
//! Commands: serve, sites, index, page, search, config, completions

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docgate_core::{gateway, site, DocGateway, SiteKey};
use docgate_fetch::HttpFetcher;
use docgate_mcp::{envelope, DocgateConfig, DocgateMcpService};

#[derive(Parser)]
#[command(name = "docgate")]
#[command(version)]
#[command(about = "Documentation gateway exposing llms.txt doc sites as MCP tools")]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true, default_value = "docgate.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the MCP server over stdio
    Serve,
    /// List documentation sites
    Sites,
    /// Print a site's index
    Index {
        /// Site key (default: mcp)
        #[arg(short, long)]
        site: Option<String>,
    },
    /// Print a documentation page
    Page {
        /// Full URL or site-relative path
        url: String,
        /// Site key (default: mcp)
        #[arg(short, long)]
        site: Option<String>,
    },
    /// Search a site's index
    #[command(alias = "s")]
    Search {
        query: String,
        /// Site key (default: mcp)
        #[arg(short, long)]
        site: Option<String>,
        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,
        /// Maximum matches to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Validate and display configuration
    Config,
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve => cmd_serve(&cli.config).await,
        Commands::Sites => cmd_sites(),
        Commands::Index { site } => cmd_index(&cli.config, site.as_deref()).await,
        Commands::Page { url, site } => cmd_page(&cli.config, site.as_deref(), &url).await,
        Commands::Search {
            query,
            site,
            case_sensitive,
            limit,
        } => cmd_search(&cli.config, site.as_deref(), &query, !case_sensitive, limit).await,
        Commands::Config => cmd_config(&cli.config),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "docgate", &mut io::stdout());
            Ok(())
        }
    }
}

/// Logs go to stderr; stdout carries MCP traffic or command output.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: &Path) -> Result<DocgateConfig> {
    DocgateConfig::load(path).context("Failed to load configuration")
}

fn http_gateway(config: &DocgateConfig) -> Result<DocGateway<HttpFetcher>> {
    let fetcher = HttpFetcher::new(&config.fetch)?;
    Ok(DocGateway::new(fetcher))
}

async fn cmd_serve(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let service = DocgateMcpService::new(config)?;

    let sites: Vec<&str> = site::list_valid_keys().to_vec();
    info!(
        sites = ?sites,
        default = %SiteKey::DEFAULT,
        tools = ?service.tool_names(),
        "Starting docgate MCP server on stdio"
    );

    let running = service
        .serve(stdio())
        .await
        .context("Failed to start MCP service")?;
    running.waiting().await?;

    info!("Server shutdown complete");
    Ok(())
}

fn cmd_sites() -> Result<()> {
    let listing = gateway::list_sites();
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

async fn cmd_index(config_path: &Path, site: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let doc = http_gateway(&config)?.fetch_index(site).await?;
    print!("{}", doc.content);
    Ok(())
}

async fn cmd_page(config_path: &Path, site: Option<&str>, url: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let doc = http_gateway(&config)?.fetch_page(site, url).await?;
    print!("{}", doc.content);
    Ok(())
}

async fn cmd_search(
    config_path: &Path,
    site: Option<&str>,
    query: &str,
    case_insensitive: bool,
    limit: Option<usize>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let found = http_gateway(&config)?
        .search(site, query, case_insensitive)
        .await?;
    let body = envelope::search_body(found, config.match_limit(limit));
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn cmd_config(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{rendered}");
    Ok(())
}

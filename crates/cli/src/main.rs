use anyhow::Result;
use clap::{Parser, Subcommand};
use notehub_client::NoteHubClient;
use notehub_core::{DEFAULT_PORT, NoteHubConfig};
use notehub_service::FilterPageService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "notehub")]
#[command(about = "Server-rendered NoteHub category filter pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve filter pages over HTTP
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Render a filter page as JSON (metadata, tag and dehydrated state)
    Render {
        /// Path segments after /notes/filter/, e.g. `Work`
        slug: Vec<String>,
    },
    /// Print the page metadata for a slug without fetching notes
    Metadata { slug: Vec<String> },
    /// List the known categories
    Categories,
}

pub(crate) fn build_page_service(config: &NoteHubConfig) -> Result<Arc<FilterPageService>> {
    let client = NoteHubClient::from_config(config)?;
    Ok(Arc::new(FilterPageService::new(Arc::new(client), config.site_url.clone())))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = NoteHubConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, port, host).await,
        Commands::Render { slug } => commands::render::run_render(&config, &slug).await,
        Commands::Metadata { slug } => commands::render::run_metadata(&config, &slug),
        Commands::Categories => commands::render::run_categories(),
    }
}

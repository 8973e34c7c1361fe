use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use leadengine_core::{
    DB_POOL_MAX_CONNECTIONS, DEFAULT_MAX_DIFFICULTY, DEFAULT_MIN_CPC, env_parse_with_default,
};
use leadengine_service::seo_service::DEFAULT_BASE_URL;
use leadengine_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "leadengine", version)]
#[command(about = "Local Authority Lead Engine: niche ranking, site generation and lead capture", long_about = None)]
struct Cli {
    /// `postgres://...` or a SQLite file path
    #[arg(long, global = true, env = "LEADENGINE_DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the lead intake API
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Seconds between partner outreach scans; 0 disables the scheduler
        #[arg(long, default_value = "3600")]
        outreach_interval_secs: u64,
    },
    /// Filter the seed niches and write top_niches.json / top_niches.csv
    Niches {
        #[arg(short, long, default_value = "data")]
        out_dir: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MIN_CPC)]
        min_cpc: f64,
        #[arg(long, default_value_t = DEFAULT_MAX_DIFFICULTY)]
        max_difficulty: u32,
    },
    /// Render static sites from the ranked niche file
    Generate {
        #[arg(short, long, default_value = "data/top_niches.json")]
        niches: PathBuf,
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,
        /// Assets copied into every site as `static/`
        #[arg(short, long, default_value = "static")]
        static_dir: PathBuf,
        /// Contact number printed on the pages
        #[arg(long)]
        phone: Option<String>,
        /// Render every ranked niche instead of only the first
        #[arg(long)]
        all: bool,
    },
    /// Run one partner outreach scan and print the report
    Outreach,
    /// Submit the sitemap of every generated site
    Sitemaps {
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
    /// Assign or clear the partner contact of a site
    Partner {
        slug: String,
        #[arg(required_unless_present = "clear")]
        email: Option<String>,
        #[arg(long, conflicts_with = "email")]
        clear: bool,
    },
}

pub(crate) fn get_db_path() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("leadengine").join("leads.db")
}

pub(crate) fn ensure_db_dir(db_path: &std::path::Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Connect to the configured database, creating the `SQLite` directory if
/// needed.
pub(crate) async fn open_storage(database_url: Option<&str>) -> Result<Arc<StorageBackend>> {
    let pool_size = env_parse_with_default("LEADENGINE_DB_POOL_SIZE", DB_POOL_MAX_CONNECTIONS);
    let url = match database_url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => url.to_owned(),
        None => get_db_path().display().to_string(),
    };
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(&url);
        ensure_db_dir(std::path::Path::new(path))?;
    }
    let storage = StorageBackend::connect(&url, pool_size).await?;
    tracing::debug!(backend = storage.kind(), "storage connected");
    Ok(Arc::new(storage))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let database_url = cli.database_url.as_deref();

    match cli.command {
        Commands::Serve { port, host, outreach_interval_secs } => {
            commands::serve::run(database_url, host, port, outreach_interval_secs).await?;
        },
        Commands::Niches { out_dir, min_cpc, max_difficulty } => {
            commands::niches::run(&out_dir, min_cpc, max_difficulty)?;
        },
        Commands::Generate { niches, output_dir, static_dir, phone, all } => {
            commands::generate::run(&niches, output_dir, static_dir, phone, all)?;
        },
        Commands::Outreach => {
            commands::outreach::run(database_url).await?;
        },
        Commands::Sitemaps { output_dir, base_url } => {
            commands::sitemaps::run(&output_dir, &base_url).await?;
        },
        Commands::Partner { slug, email, clear } => {
            let email = if clear { None } else { email };
            commands::partner::run(database_url, &slug, email.as_deref()).await?;
        },
    }

    Ok(())
}

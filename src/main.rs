//! adminview - Entry Point

use adminview::source::Dataset;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// adminview - terminal admin console for orders and users
#[derive(Parser, Debug)]
#[command(name = "adminview")]
#[command(version)]
#[command(about = "Browse reseller orders and users with search, filters, sorting and pagination")]
pub struct Args {
    /// Path to a JSON array of records (users fall back to built-in sample data)
    pub file: Option<PathBuf>,

    /// Which table to show
    #[arg(short, long, value_enum, default_value_t = Dataset::Orders)]
    pub dataset: Dataset,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Equality filter as COLUMN=VALUE (repeatable)
    #[arg(short, long = "filter", value_name = "COLUMN=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to open (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: Option<u64>,

    /// Rows per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn startup_query(&self) -> adminview::state::StartupQuery {
        adminview::state::StartupQuery {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            descending: self.desc,
            page: self.page.map(to_usize),
        }
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Split `COLUMN=VALUE` at the first `=`.
fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected COLUMN=VALUE, got '{raw}'")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = adminview::config::load_config_with_precedence(args.config.clone())?;
        let merged = adminview::config::merge_config(config_file);
        let with_env = adminview::config::apply_env_overrides(merged)?;
        adminview::config::apply_cli_overrides(with_env, args.page_size.map(to_usize))
    };
    config.validate()?;

    // A broken log path should not keep the console from starting
    if let Err(e) = adminview::logging::init(&config.log_file_path) {
        eprintln!("Warning: logging disabled: {e}");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let records = adminview::source::load_dataset(args.dataset, args.file.clone())
        .map_err(adminview::model::AppError::from)?;
    info!(
        dataset = args.dataset.title(),
        count = records.len(),
        "Records loaded"
    );

    let mut state = adminview::state::AppState::new(records, &config)
        .map_err(adminview::model::AppError::from)?;
    state
        .apply_startup(&args.startup_query())
        .map_err(adminview::model::AppError::from)?;

    let styles = adminview::view::TableStyles::with_color_config(
        adminview::view::ColorConfig::from_env_and_args(args.no_color),
    );

    adminview::view::run_with_state(state, styles)?;

    Ok(())
}

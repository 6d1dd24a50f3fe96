//! rmdex - Entry Point

use clap::Parser;
use rmdex::model::AppError;
use rmdex::query::{PageSize, SortKey};
use std::path::PathBuf;
use tracing::info;

/// rmdex - browse Rick and Morty characters in the terminal
#[derive(Parser, Debug)]
#[command(name = "rmdex")]
#[command(version)]
#[command(about = "Search, filter, sort and page through Rick and Morty characters")]
pub struct Args {
    /// First page URL of the character collection
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Start with this name search applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Rows per page
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// Initial sort key
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Sort Z to A
    #[arg(long)]
    pub desc: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let value: u32 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    PageSize::try_from(value).map_err(|e| e.to_string())
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::ALL
        .into_iter()
        .find(|key| key.label().eq_ignore_ascii_case(raw))
        .ok_or_else(|| format!("unknown sort key '{raw}': expected name, status or gender"))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rmdex::config::load_config_with_precedence(args.config.clone())?;
        let merged = rmdex::config::merge_config(config_file);
        let with_env = rmdex::config::apply_env_overrides(merged);

        // --desc only overrides when given
        let descending = args.desc.then_some(true);
        rmdex::config::apply_cli_overrides(
            with_env,
            args.endpoint.clone(),
            args.page_size,
            args.sort,
            descending,
        )
    };

    rmdex::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut query = config.initial_query();
    if let Some(search) = &args.search {
        query.set_search_text(search.clone());
    }

    let mut source = rmdex::source::HttpPageSource::new(&config.user_agent)?;

    let color = rmdex::view::ColorConfig::from_env_and_args(args.no_color);
    let cli_args = rmdex::view::CliArgs::new(config.endpoint, query, color);

    rmdex::view::run_with_source(&mut source, cli_args).map_err(|err| match err {
        rmdex::view::TuiError::Io(io) => AppError::Terminal(io),
    })?;

    Ok(())
}

//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `video_gallery` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use video_gallery::initialization::init_logger;
use video_gallery::session::GallerySession;
use video_gallery::{
    run_gallery, Catalog, Config, ExportFormat, GalleryView, LogFormat, LogLevel, SortMode,
    ViewState,
};

/// Browse a static video catalog: search, filter by category, sort by views.
#[derive(Debug, Parser)]
#[command(name = "video_gallery", version, about)]
struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long, global = true, value_parser)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the videos matching the given filters
    List(ListArgs),
    /// Print the category options, "all" first
    Categories,
    /// Interactive session: change search, category and sort and see results
    Browse(FilterArgs),
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Search titles, descriptions and categories (case-insensitive)
    #[arg(long, default_value = "")]
    search: String,

    /// Only show this category ("all" shows every category)
    #[arg(long, default_value = "all")]
    category: String,

    /// Sort order: default|views
    #[arg(long, value_enum, default_value_t = SortMode::Default)]
    sort: SortMode,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Output format: text|html|jsonl|csv
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Output file (stdout if omitted)
    #[arg(long, short, value_parser)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config {
        catalog: cli.catalog,
        log_level: cli.log_level,
        log_format: cli.log_format,
        ..Config::default()
    };

    init_logger(&config).context("Failed to initialize logger")?;

    if let Err(e) = run(cli.command, config) {
        eprintln!("video_gallery error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn run(command: Command, config: Config) -> Result<()> {
    match command {
        Command::List(args) => {
            let config = Config {
                search: args.filters.search,
                category: args.filters.category,
                sort: args.filters.sort,
                format: args.format,
                output: args.output,
                ..config
            };
            let report = run_gallery(&config)?;
            if !report.catalog_available {
                log::warn!("Catalog could not be loaded; rendered the unavailable state");
            }
            Ok(())
        }
        Command::Categories => {
            let catalog = Catalog::open(config.catalog.as_deref());
            let view = GalleryView::derive(&catalog, &ViewState::default());
            for category in view.categories() {
                println!("{}", category);
            }
            Ok(())
        }
        Command::Browse(filters) => {
            let catalog = Catalog::open(config.catalog.as_deref());
            let state = ViewState::new(filters.search, &filters.category, filters.sort);
            let mut session = GallerySession::new(catalog, state);

            let stdout = io::stdout();
            let color = stdout.is_terminal();
            let mut out = stdout.lock();
            session
                .run(io::stdin().lock(), &mut out, color)
                .context("Browse session failed")
        }
    }
}

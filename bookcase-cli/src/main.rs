//! Bookcase CLI - Command-line interface for browsing a book catalog

mod commands;

use anyhow::{Context, Result};
use bookcase_core::{CatalogConfig, PageSize, Theme};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookcase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog JSON file (defaults to the bundled sample catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Books per page (must be at least 1)
    #[arg(long, global = true)]
    page_size: Option<PageSize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books matching a search
    List {
        /// Title fragment (case-insensitive)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author id, or "any"
        #[arg(short, long, default_value = "any")]
        author: String,

        /// Genre id, or "any"
        #[arg(short, long, default_value = "any")]
        genre: String,

        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a single book
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known authors
    Authors,

    /// List known genres
    Genres,

    /// Show or change the colour theme
    Theme {
        /// New theme to save (day or night)
        theme: Option<Theme>,

        /// Treat the terminal as preferring a dark colour scheme
        #[arg(long)]
        prefers_dark: bool,

        /// Forget the saved theme
        #[arg(long, conflicts_with = "theme")]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookcase=debug,bookcase_core=debug"
    } else {
        "bookcase=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = CatalogConfig::from_env().context("Invalid environment configuration")?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    match cli.command {
        Commands::List {
            title,
            author,
            genre,
            page,
            json,
        } => commands::list(&config, &title, &author, &genre, page, json),

        Commands::Show { id, json } => commands::show(&config, &id, json),

        Commands::Authors => commands::authors(&config),

        Commands::Genres => commands::genres(&config),

        Commands::Theme {
            theme,
            prefers_dark,
            reset,
        } => commands::theme(&config, theme, prefers_dark, reset),
    }
}

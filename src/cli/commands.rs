//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-headlines news feed CLI
#[derive(Parser, Debug)]
#[command(name = "newsfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Endpoint URL (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search parameters shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Keywords to search for
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Category filter (e.g. business, technology)
    #[arg(long)]
    pub category: Option<String>,

    /// Country filter (two-letter code)
    #[arg(long)]
    pub country: Option<String>,

    /// Articles per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the first pages of a search
    First {
        #[command(flatten)]
        search: SearchArgs,

        /// Maximum number of pages
        #[arg(long)]
        pages: Option<u32>,
    },

    /// Fetch every page of a search
    All {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Fetch a single page by number
    Page {
        #[command(flatten)]
        search: SearchArgs,

        /// Page number, starting at 1
        #[arg(short, long)]
        number: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one array of articles per page)
    Json,
    /// Human-readable output
    Pretty,
}

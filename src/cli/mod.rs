//! CLI module
//!
//! Command-line interface over the news feed client.
//!
//! # Commands
//!
//! - `first` - Fetch the first pages of a search
//! - `all` - Fetch every page of a search
//! - `page` - Fetch a single page by number

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SearchArgs};
pub use runner::{render_pages, Runner};

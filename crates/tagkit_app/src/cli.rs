use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tagkit_core::SortOrder;

#[derive(Debug, Parser)]
#[command(name = "tagkit")]
#[command(about = "Random tag search URLs and tag lists scraped from HTML")]
#[command(version)]
pub struct Cli {
    /// Settings file (RON); defaults to ./tagkit.ron when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to ./tagkit.log
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw random tags from a tag file and print a search URL
    Generate(GenerateArgs),
    /// Extract tags from HTML files, or from stdin when no files are given
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Comma-separated tag file
    #[arg(short = 'f', long)]
    pub tags_file: Option<PathBuf>,

    /// Number of tags to draw
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// popular-today, popular-week or popular
    #[arg(short, long)]
    pub sort: Option<SortOrder>,

    /// Search page the query is appended to
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// HTML files to read
    pub files: Vec<PathBuf>,

    /// Separator between extracted tags
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Save the joined result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSS selector for the tag name inside each anchor
    #[arg(long)]
    pub name_selector: Option<String>,

    /// CSS selector for the optional count inside each anchor
    #[arg(long)]
    pub count_selector: Option<String>,
}

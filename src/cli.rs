use clap::Parser;
use std::path::PathBuf;

use crate::board::SearchScope;
use crate::config::AppConfig;

/// msgboard - terminal client for a REST message board
#[derive(Parser, Debug)]
#[command(name = "msgboard")]
#[command(about = "A TUI message board client backed by a REST collection")]
#[command(version)]
pub struct Cli {
    /// Base URL of the message resource (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Match search terms against titles only
    #[arg(long)]
    pub title_only: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if self.title_only {
            config.search_scope = SearchScope::TitleOnly;
        }
    }
}

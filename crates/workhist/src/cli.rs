//! CLI definition.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use workhist_config::{FetchErrorPolicy, Overrides, default_config_path, load_config};
use workhist_core::{Collector, GitLogSource, RenderOptions, Report};
use workhist_git::LogQuery;

/// Merge commit history from several git repositories into one activity report.
#[derive(Debug, Parser)]
#[command(name = "workhist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: workhist.toml next to the executable)
    #[arg(env = "WORKHIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only report commits by this author (overrides `user`)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Report width in columns (overrides `width`)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Lookback window in months (overrides `months`)
    #[arg(short, long)]
    pub months: Option<u32>,

    /// Skip repositories whose log cannot be read instead of failing
    #[arg(long)]
    pub skip_failed: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            user: self.user.clone(),
            width: self.width,
            months: self.months,
            on_fetch_error: self.skip_failed.then_some(FetchErrorPolicy::Skip),
        }
    }

    /// Builds and prints the report.
    pub fn run(self) -> Result<()> {
        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let config = load_config(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?
            .apply(self.overrides())
            .context("invalid command-line option")?;

        let mut query = LogQuery::new(config.months);
        if let Some(author) = config.author() {
            query = query.with_author(author);
        }
        info!(
            repos = config.repos.len(),
            author = ?config.author(),
            months = config.months,
            "building report"
        );

        let collector = Collector::new(Box::new(GitLogSource), config.on_fetch_error);
        let timeline = collector.collect(&config.repo_paths(), &query)?;

        let report = Report::new(RenderOptions {
            width: config.width,
            show_user: config.author().is_none(),
        });
        report.write_to(&timeline, io::stdout().lock())?;

        Ok(())
    }
}

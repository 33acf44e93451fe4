//! Command-line interface definitions.

use crate::config::{ResolveContext, SiteOptions};
use chrono::Datelike;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "site.toml";

/// Documentation site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, `.toml` or `.json` (default: site.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and report the first error
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the resolved configuration as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// List every recognized option with its type and default
    #[command(visible_alias = "o")]
    Options,

    /// Write a commented starter site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Options applied on top of the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Year substituted for `{year}` in the footer copyright (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Override the site URL.
    ///
    /// Useful for CI deployments where the production URL differs from the
    /// one in site.toml. A path component becomes `base_path` when neither
    /// the file nor `--base-path` sets one.
    ///
    /// Example: docsite resolve --url "https://polocto.github.io/FolderFlow/"
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Override the base path (must start and end with `/`)
    #[arg(short = 'B', long = "base-path")]
    pub base_path: Option<String>,
}

impl ResolveArgs {
    /// Overlay merged over the file's options.
    pub fn overrides(&self) -> SiteOptions {
        SiteOptions {
            url: self.url.clone(),
            base_path: self.base_path.clone(),
            ..SiteOptions::default()
        }
    }

    pub fn context(&self) -> ResolveContext {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        ResolveContext::new(year)
    }
}

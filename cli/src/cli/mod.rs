//! CLI for resolving and inspecting the API base URL.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use endpoint_core::{BuildMode, ConfigSource, EndpointConfig, ProcessEnv, API_BASE_KEY};

use commands::{run_build_config, run_resolve, run_target};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "endpoint")]
#[command(about = "Resolve the API base URL the frontend client should target", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Flags that override `API_BASE` / `APP_MODE` from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ResolveArgs {
    /// Full base URL; replaces API_BASE. An empty value means "no override".
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Resolve as a production build.
    #[arg(long, conflicts_with = "development")]
    pub production: bool,

    /// Resolve as a development build.
    #[arg(long)]
    pub development: bool,
}

impl ResolveArgs {
    fn mode(&self) -> Option<BuildMode> {
        if self.production {
            Some(BuildMode::Production)
        } else if self.development {
            Some(BuildMode::Development)
        } else {
            None
        }
    }

    /// Combine flags with `source`. Flags win; `APP_MODE` is only parsed
    /// when no mode flag was given.
    pub fn endpoint_config<S: ConfigSource + ?Sized>(&self, source: &S) -> Result<EndpointConfig> {
        let mut cfg = match self.mode() {
            Some(mode) => EndpointConfig::new(source.get(API_BASE_KEY), mode),
            None => EndpointConfig::from_source(source)
                .context("failed to read endpoint configuration")?,
        };
        if let Some(api_base) = &self.api_base {
            cfg.api_base = Some(api_base.clone());
        }
        Ok(cfg)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the resolved base URL.
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,

        /// Print the URL, the rule that selected it, and the mode as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the full URL a request path would be sent to.
    Target {
        /// Request path relative to the base URL (absolute URLs pass through).
        path: String,

        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Validate a frontend build config file and print it with defaults filled in.
    BuildConfig {
        /// Path to the TOML file.
        #[arg(long, default_value = "frontend.toml", value_name = "PATH")]
        file: PathBuf,

        /// Print the built-in defaults instead of reading a file.
        #[arg(long)]
        defaults: bool,
    },
}

impl CliCommand {
    /// Parse process arguments, run the command, and return what to print.
    pub fn run_from_args() -> Result<String> {
        let cli = Cli::parse();
        cli.command.run(&ProcessEnv)
    }

    pub fn run<S: ConfigSource + ?Sized>(self, source: &S) -> Result<String> {
        match self {
            CliCommand::Resolve { args, json } => run_resolve(&args.endpoint_config(source)?, json),
            CliCommand::Target { path, args } => Ok(run_target(&args.endpoint_config(source)?, &path)),
            CliCommand::BuildConfig { file, defaults } => {
                let file = (!defaults).then_some(file.as_path());
                run_build_config(file)
            }
        }
    }
}

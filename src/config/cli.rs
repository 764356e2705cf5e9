use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the on.brand console.
#[derive(Debug, Parser)]
#[command(name = "onbrand", version, about = "on.brand post review console")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "ONBRAND_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run an interactive session driven by fragments and actions on stdin.
    Session(SessionArgs),
    /// Fetch the post collection once and print it.
    Posts,
}

#[derive(Debug, Args, Default, Clone)]
pub struct SessionArgs {
    /// Fragment present in the address bar when the session starts.
    #[arg(long = "fragment", value_name = "FRAGMENT")]
    pub fragment: Option<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Override the posts API base URL.
    #[arg(long = "api-base-url", value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    /// Override the posts API request timeout.
    #[arg(long = "api-timeout-seconds", value_name = "SECONDS", global = true)]
    pub api_timeout_seconds: Option<u64>,

    /// Override the name comments and rejections are attributed to.
    #[arg(long = "review-user", value_name = "NAME", global = true)]
    pub review_user: Option<String>,

    /// Override the delay before returning to the dashboard after a review action.
    #[arg(long = "review-navigation-delay-ms", value_name = "MS", global = true)]
    pub review_navigation_delay_ms: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

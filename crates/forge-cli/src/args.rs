use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "app-forge")]
#[command(about = "Generate a single-file HTML mobile app design system from an idea", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/app-forge/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Generate the HTML design system for an idea")]
    Generate(GenerateArgs),

    #[command(about = "Show which category an idea falls into")]
    Classify {
        /// App idea in plain language
        idea: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    #[command(about = "List available generation backends")]
    Backends,

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// App idea in plain language
    pub idea: String,

    /// Reference image sent with the idea
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// MIME type of the image (inferred from the extension when omitted)
    #[arg(long, requires = "image")]
    pub mime: Option<String>,

    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the embedded design description here
    #[arg(long)]
    pub prompt_output: Option<PathBuf>,

    /// Backend name (see `app-forge backends`)
    #[arg(long)]
    pub backend: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub temperature: Option<f32>,

    /// Override the backend base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration (API key redacted)")]
    Show,

    #[command(about = "Write a default config file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Default filter string for env_logger; `RUST_LOG` still takes precedence
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

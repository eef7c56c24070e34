use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{
    link::link_model::StatusKind, outcome::outcome_model::Choice,
    share::share_targets::ShareChannel,
};

pub const DEFAULT_CONFIG_FILE: &str = "love-link.yaml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "love-link",
    version,
    about = "Build and open shareable yes/no love links"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append a JSONL session trace to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: love-link.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the generator flow and print the shareable link
    Generate {
        /// Your name (shown to the receiver)
        #[arg(long, default_value = "")]
        name: String,

        /// Relationship status: taken, single or complicated
        #[arg(long)]
        status: Option<StatusKind>,

        /// Recipient name
        #[arg(long, default_value = "")]
        to: String,

        /// Personal message
        #[arg(long, default_value = "")]
        msg: String,

        /// Page location links are built on
        #[arg(long)]
        base_url: Option<String>,

        /// Copy the link to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Also print a share URL for this channel (whatsapp, x)
        #[arg(long)]
        share: Option<ShareChannel>,
    },

    /// Open a link the way a browser would and show the first screen
    Open {
        /// Link, or a bare query string placed on `link.base_url`
        url: String,
    },

    /// Answer a link's question and show the outcome
    Respond {
        /// Link, or a bare query string placed on `link.base_url`
        url: String,

        /// yes or no
        #[arg(long)]
        answer: Choice,

        /// Copy the decline reply to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print the share-target URL for a link
    Share {
        /// Link, or a bare query string placed on `link.base_url`
        url: String,

        /// whatsapp or x (default from config)
        #[arg(long)]
        channel: Option<ShareChannel>,
    },

    /// Replay session scripts from YAML files
    Play {
        /// Script YAML file or directory of YAML files
        path: String,

        /// Output format: console, junit
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `love-link.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub link: LinkConfig,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_channel")]
    pub channel: ShareChannel,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
        }
    }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_channel() -> ShareChannel { ShareChannel::WhatsApp }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring malformed config '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config > default)
// ============================================================================

pub fn resolve_base_url(cli: Option<&str>, config: &AppConfig) -> String {
    cli.map(str::to_string)
        .unwrap_or_else(|| config.link.base_url.clone())
}

pub fn resolve_trace_path<'a>(cli: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli.or(config.trace.path.as_deref())
}

pub fn resolve_channel(cli: Option<ShareChannel>, config: &AppConfig) -> ShareChannel {
    cli.unwrap_or(config.share.channel)
}

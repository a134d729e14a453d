//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hostinfo - Host label and attribute store
///
/// Reads and updates the labels and attributes recorded for a host.
#[derive(Parser, Debug)]
#[command(name = "hostinfo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HOSTINFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host to operate on
    #[arg(long, global = true, env = "HOSTINFO_HOST")]
    pub host: Option<String>,

    /// Directory holding host info files (overrides store.dir)
    #[arg(long, global = true, env = "HOSTINFO_STORE_DIR")]
    pub store_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create host info for a new host
    Create(CreateArgs),

    /// Show labels, attributes and derived host properties
    Show(ShowArgs),

    /// Read or change host labels
    Label(LabelArgs),

    /// Read or change host attributes
    Attr(AttrArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the create command
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Initial labels
    #[arg(short, long = "label")]
    pub labels: Vec<String>,

    /// Initial attributes (KEY=VALUE)
    #[arg(short, long = "attr", value_parser = parse_key_value)]
    pub attrs: Vec<(String, String)>,

    /// Overwrite existing host info
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the label command
#[derive(Parser, Debug)]
pub struct LabelArgs {
    /// Subcommand for labels
    #[command(subcommand)]
    pub action: LabelAction,
}

/// Label subcommands
#[derive(Subcommand, Debug)]
pub enum LabelAction {
    /// Print the value of the first `prefix:value` label
    Get {
        /// Label prefix (e.g., board)
        prefix: String,
    },

    /// Add labels
    Add {
        /// Labels to add
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Remove labels
    Remove {
        /// Labels to remove
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Replace all labels with a prefix by `prefix:value`
    Set {
        /// Label prefix (e.g., cros-version)
        prefix: String,
        /// New value
        value: String,
    },
}

/// Arguments for the attr command
#[derive(Parser, Debug)]
pub struct AttrArgs {
    /// Subcommand for attributes
    #[command(subcommand)]
    pub action: AttrAction,
}

/// Attribute subcommands
#[derive(Subcommand, Debug)]
pub enum AttrAction {
    /// Print an attribute value
    Get {
        /// Attribute key
        key: String,
    },

    /// Set attributes
    Set {
        /// Attributes to set (KEY=VALUE)
        #[arg(required = true, value_parser = parse_key_value)]
        pairs: Vec<(String, String)>,
    },

    /// Remove attributes
    Unset {
        /// Attribute keys to remove
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., store.backend)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for show command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Table,
    /// JSON output
    Json,
    /// Labels only, one per line
    Plain,
}

/// Parse an attribute in KEY=VALUE format
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE format: no '=' found in '{s}'"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE format: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

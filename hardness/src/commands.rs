use clap::{Parser, Subcommand};
use hardness_core::settings::DEFAULT_SETTINGS_FILE;
use records::MeasurementGroup;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hardness", version, about = "Hardness data entry with SPC control limits")]
pub struct Cli {
    /// Settings file (TOML); built-in defaults are used when it does not exist
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the record store if it does not exist yet
    Init,
    /// Show both charts with the current limits and no entry
    Show {
        #[arg(long)]
        chart: Option<PathBuf>,
        #[arg(long, alias = "jq")]
        json: bool,
    },
    /// Validate and display one entry, optionally saving it
    Enter {
        #[arg(long, default_value = "")]
        technician: String,
        #[arg(long, default_value = "")]
        sample: String,
        /// Bottom readings for positions 1-6
        #[arg(long, num_args = 0..=6, allow_hyphen_values = true)]
        bottom: Vec<String>,
        /// Top readings for positions 1-6
        #[arg(long, num_args = 0..=6, allow_hyphen_values = true)]
        top: Vec<String>,
        #[arg(long)]
        save: bool,
        #[arg(long)]
        chart: Option<PathBuf>,
        #[arg(long, alias = "jq")]
        json: bool,
    },
    /// Print the resolved control limits for both groups
    Limits {
        #[arg(long, alias = "jq")]
        json: bool,
    },
    /// Print every stored value for one group, oldest first
    History { group: MeasurementGroup },
}

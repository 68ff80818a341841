use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::overview::SortMode;

/// Orrery - A terminal system-overview explorer for star systems
#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the body hierarchy of a star system
    Show(ShowArgs),

    /// Launch the interactive system overview
    Tui(TuiArgs),

    /// Format a physical quantity for display
    Format(FormatArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the manual page
    Manpage,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// System file (TOML or JSON); the built-in Sol system if omitted
    pub system: Option<PathBuf>,

    /// Only show bodies whose name contains this text
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Hide moons
    #[arg(long)]
    pub no_moons: bool,

    /// Hide ground and space stations
    #[arg(long)]
    pub no_stations: bool,

    /// Sort siblings by
    #[arg(short, long, value_enum, value_name = "BY")]
    pub sort: Option<SortMode>,

    /// Select a body by key (can be specified multiple times)
    #[arg(long = "select", value_name = "KEY")]
    pub select: Vec<String>,

    /// Start the tree at this body instead of the system root
    #[arg(long, value_name = "KEY")]
    pub root: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// System file (TOML or JSON); the built-in Sol system if omitted
    pub system: Option<PathBuf>,

    /// Start the tree at this body instead of the system root
    #[arg(long, value_name = "KEY")]
    pub root: Option<String>,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    #[command(subcommand)]
    pub quantity: Quantity,
}

#[derive(Subcommand, Debug)]
pub enum Quantity {
    /// Distance in metres
    Distance {
        #[arg(allow_negative_numbers = true)]
        meters: f64,
        /// Keep two decimals below one kilometre
        #[arg(long)]
        fractional: bool,
    },
    /// Speed in metres per second
    Speed {
        #[arg(allow_negative_numbers = true)]
        meters_per_second: f64,
    },
    /// Mass in kilograms
    Mass {
        #[arg(allow_negative_numbers = true)]
        kilograms: f64,
    },
    /// Duration in seconds
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        /// Number of components to show
        #[arg(short, long, value_name = "N")]
        elements: Option<usize>,
    },
    /// Latitude in decimal degrees
    Latitude {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Longitude in decimal degrees
    Longitude {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Abbreviate a large number (k, mil, bil, trn)
    Abbrev {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Decimal places
        #[arg(short, long, value_name = "N")]
        places: Option<usize>,
    },
    /// Group the digits of a number
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Decimal places
        #[arg(short, long, default_value = "0", value_name = "N")]
        places: usize,
    },
}

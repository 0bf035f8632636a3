use clap::{Parser, ValueEnum};
use gsm_bridge::engine::config::SourceFlavor;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "gsm-bridge - Converts xtb/Turbomole energy and gradient files into the ORCA-style .engrad/.out pair expected by the GSM transition-state driver.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Basename of the current GSM step (e.g. structure0001).
    /// Outputs are written as <BASENAME>.engrad and <BASENAME>.out.
    #[arg(required = true, value_name = "BASENAME")]
    pub basename: String,

    /// Directory holding the `energy` and `gradient` files.
    #[arg(short = 'C', long, value_name = "PATH", default_value = ".")]
    pub workdir: PathBuf,

    /// Program that produced the input files, overriding the config file.
    #[arg(long, value_enum, value_name = "PROGRAM")]
    pub source: Option<SourceArg>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.rename-from=structure
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Re-read the written .engrad file and check it against the inputs.
    #[arg(long)]
    pub verify: bool,

    /// Leave `energy` and `gradient` in place instead of renaming them.
    #[arg(long)]
    pub no_rename: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    /// xtb, requires <BASENAME>.xtbout next to the inputs
    Xtb,
    /// Turbomole, energy taken from the last cycle
    Turbomole,
}

impl From<SourceArg> for SourceFlavor {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Xtb => SourceFlavor::Xtb,
            SourceArg::Turbomole => SourceFlavor::Turbomole,
        }
    }
}

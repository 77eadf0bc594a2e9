use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::cli::color_when::ColorWhen;

/// Morph one text file into another, a limited number of character edits at a
/// time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The text to morph from
    #[arg(index = 1)]
    pub old: PathBuf,

    /// The text to morph into
    #[arg(index = 2)]
    pub new: PathBuf,

    /// Number of character edits to commit
    #[arg(short, long, default_value_t = 0, conflicts_with = "frames")]
    pub budget: usize,

    /// Print every frame, separated by form feeds, until the morph completes
    #[arg(long)]
    pub frames: bool,

    /// Budget added from one frame to the next
    #[arg(long, default_value_t = 1, requires = "frames")]
    pub step: usize,

    /// YAML file with the pairing options
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[arg(
            long,
            value_name = "WHEN",
            default_value_t = ColorWhen::Auto,
            default_missing_value = "always",
            value_enum
        )]
    pub color: ColorWhen,
}

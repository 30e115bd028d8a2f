use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitstats",
    version,
    about = "Print distance, speed and calorie summaries for tracker workout packages"
)]
pub struct Cli {
    /// JSON file with packages: [{"workout_type": "RUN", "data": [15000, 1, 75]}, ...]
    ///
    /// Without it, the built-in demo packages (SWM, RUN, WLK) are rendered.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

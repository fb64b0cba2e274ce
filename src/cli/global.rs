use clap::Args;

use super::args::EngineCli;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Conversion engine (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub engine: Option<EngineCli>,

    /// Load settings from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true)]
    pub max_size: Option<usize>,

    /// Process inputs exceeding the size limit
    #[arg(long, global = true)]
    pub force: bool,

    /// Append a newline after encoded text and strip one before decoding
    #[arg(long, global = true)]
    pub line_ending: bool,

    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

mod args;
mod commands;
mod config;
mod global;
mod handlers;

use clap::Parser;

use args::Commands;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base985161")]
#[command(version)]
#[command(about = "Encode and decode binary data as Base-985161 text (U+10000..U+100848)", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Usage errors exit with status 2 from inside clap
    let cli = Cli::parse();

    if cli.global.no_color {
        base985161::disable_color();
    }

    let settings = config::load_settings(&cli.global)?;

    match cli.command {
        Commands::Enc(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Dec(args) => handlers::decode::handle(args, &cli.global, &settings),
    }
}

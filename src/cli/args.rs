use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode raw bytes to Base-985161 text
    Enc(EncodeArgs),
    /// Decode Base-985161 text to raw bytes
    Dec(DecodeArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file ("-" for stdin)
    #[arg(value_name = "INFILE", default_value = "-")]
    pub input: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(value_name = "OUTFILE", default_value = "-")]
    pub output: PathBuf,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file ("-" for stdin)
    #[arg(value_name = "INFILE", default_value = "-")]
    pub input: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(value_name = "OUTFILE", default_value = "-")]
    pub output: PathBuf,
}

/// Conversion engines (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EngineCli {
    /// Schoolbook long division
    LongDivision,
    /// Arbitrary-precision integer arithmetic
    #[value(name = "bigint")]
    BigInt,
}

impl From<EngineCli> for base985161::Engine {
    fn from(cli: EngineCli) -> Self {
        match cli {
            EngineCli::LongDivision => base985161::Engine::LongDivision,
            EngineCli::BigInt => base985161::Engine::BigInt,
        }
    }
}

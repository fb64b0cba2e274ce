mod cli;

use base985161::InvalidDigitError;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Decode errors carry their own `error:` header
            if e.downcast_ref::<InvalidDigitError>().is_some() {
                eprintln!("{}", e);
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

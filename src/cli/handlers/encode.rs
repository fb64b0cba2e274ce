use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use base985161::Settings;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(&args.input, settings, global)?;

    let mut encoded = base985161::encode_with(&data, settings.engine);
    if settings.line_ending {
        encoded.push('\n');
    }

    write_output(&args.output, encoded.as_bytes())
}

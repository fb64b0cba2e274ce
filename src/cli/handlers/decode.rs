use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    global::GlobalArgs,
};
use base985161::Settings;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(&args.input, settings, global)?;
    let text =
        String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;

    let text: &str = if settings.line_ending {
        strip_line_ending(&text)
    } else {
        text.as_str()
    };

    // Decode fully before touching the output so a bad character leaves
    // nothing behind
    let data = base985161::decode_with(text, settings.engine)?;

    write_output(&args.output, &data)
}

/// Removes exactly one trailing `\n` or `\r\n`.
fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

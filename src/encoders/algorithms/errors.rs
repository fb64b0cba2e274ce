use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::alphabet;

/// A character in the encoded text falls outside the alphabet.
///
/// Decoding stops at the first such character and produces no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDigitError {
    /// The offending code point
    pub codepoint: u32,
    /// Character index (not byte offset) of the offending code point
    pub position: usize,
    /// The input text, truncated for display
    pub input: String,
}

impl InvalidDigitError {
    /// Create an InvalidDigitError with context
    pub fn new(c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        InvalidDigitError {
            codepoint: c as u32,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for InvalidDigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m invalid Base-985161 character U+{:04X} at position {}",
                self.codepoint, self.position
            )?;
        } else {
            writeln!(
                f,
                "error: invalid Base-985161 character U+{:04X} at position {}",
                self.codepoint, self.position
            )?;
        }
        writeln!(f)?;

        // Caret only makes sense while the offending character is still
        // inside the truncated copy
        if self.position < 60 {
            writeln!(f, "  {}", self.input.escape_debug())?;
            let caret_column: usize = self
                .input
                .chars()
                .take(self.position)
                .map(|c| c.escape_debug().count())
                .sum();
            write!(f, "  {}", " ".repeat(caret_column))?;
            if use_color {
                writeln!(f, "\x1b[1;31m^\x1b[0m")?;
            } else {
                writeln!(f, "^")?;
            }
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "\x1b[1;36mhint:\x1b[0m valid characters: {}",
                alphabet::valid_range()
            )
        } else {
            write!(f, "hint: valid characters: {}", alphabet::valid_range())
        }
    }
}

impl std::error::Error for InvalidDigitError {}

/// A digit value outside `[0, BASE)` reached the alphabet.
///
/// Only the encoder produces digit values, and it only produces remainders
/// of a division by `BASE`, so this indicates a bug rather than bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRangeError {
    value: u32,
}

impl DigitRangeError {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for DigitRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digit value {} out of range 0..{}",
            self.value,
            alphabet::BASE
        )
    }
}

impl std::error::Error for DigitRangeError {}

/// Set once by `--no-color`; never cleared.
static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turns off ANSI colour in error rendering for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    use std::io::IsTerminal;

    color_enabled(
        COLOR_DISABLED.load(Ordering::Relaxed),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("CLICOLOR_FORCE").is_some_and(|v| v != "0"),
        std::io::stderr().is_terminal(),
    )
}

/// Precedence: explicit opt-out, then `NO_COLOR`, then `CLICOLOR_FORCE`,
/// then whether stderr is a terminal.
fn color_enabled(disabled: bool, no_color: bool, force: bool, is_terminal: bool) -> bool {
    if disabled || no_color {
        return false;
    }
    force || is_terminal
}

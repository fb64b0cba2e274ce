pub mod bigint;
pub mod errors;
pub mod math;
pub mod rebase;

// Re-export error types for public API
pub use errors::{DigitRangeError, InvalidDigitError, disable_color};

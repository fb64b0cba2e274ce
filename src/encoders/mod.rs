pub mod algorithms;

pub use algorithms::{bigint, math, rebase};

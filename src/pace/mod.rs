pub mod calculator;
pub mod formatter;

pub use calculator::{compute_pace, PaceError, PaceResult};
pub use formatter::{format_pace, round_pace};

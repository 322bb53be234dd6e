//! Output module for console output.
//!
//! Provides:
//! - Colored console messages
//! - Run statistics reporting

pub mod console;
pub mod stats;

pub use self::console::{format_bytes, print_error};
pub use stats::print_summary;

//! CLI library for testing purposes

pub mod clean;
pub mod validation;

pub use clean::{CleanOptions, CleanOutcome, run_clean_command};
pub use validation::{validate_encoding_label, validate_localization_file};

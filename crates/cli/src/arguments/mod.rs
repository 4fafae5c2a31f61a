//! Argument processing for the cmdline CLI.
//!
//! Arguments are given as `-a NAME` for flags or `-a NAME=VALUE` for valued
//! arguments. Separator styles can be overridden field by field.

pub mod processing;

// Re-exports for convenience
pub use processing::apply_arguments;
pub use processing::parse_argument;
pub use processing::SeparatorOverrides;

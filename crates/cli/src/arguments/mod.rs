//! Argument processing for the commandflow CLI.
//!
//! Flow parameters can be provided in two ways which cannot be mixed:
//! - **Named arguments**: Using `-p key=value` format
//! - **Positional arguments**: Provided as trailing arguments, matched to
//!   placeholders in order of appearance

pub mod processing;
pub mod style;

pub use processing::process_command_line;
pub use style::determine;
pub use style::Provider;
pub use style::Style;

//! How flow parameters were given on the command line.

use commandflow_core::error::Error::MixedParameterMode;
use commandflow_core::error::Result;

/// The way parameter values were supplied for a flow.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Style {
    /// No values given; the flow's parameter defaults apply
    None,
    /// `-p key=value` pairs
    Named(Vec<String>),
    /// Trailing values, one per placeholder in order of appearance
    Positional(Vec<String>),
}

/// Implemented by argument structures that carry flow parameters.
pub trait Provider {
    /// # Errors
    ///
    /// Returns an error if named and positional arguments are mixed.
    fn get_style(&self) -> Result<Style>;
}

/// Picks the [`Style`] matching the supplied arguments.
///
/// # Errors
///
/// Returns [`MixedParameterMode`] when both named and positional arguments
/// are present.
///
/// # Examples
///
/// ```rust
/// use commandflow_cli::arguments::{determine, Style};
///
/// let style = determine(&["key=value".to_string()], &[]).unwrap();
/// assert_eq!(style, Style::Named(vec!["key=value".to_string()]));
///
/// assert_eq!(determine(&[], &[]).unwrap(), Style::None);
/// ```
pub fn determine(named_args: &[String], positional_args: &[String]) -> Result<Style> {
    match (named_args.is_empty(), positional_args.is_empty()) {
        (false, false) => Err(MixedParameterMode),
        (false, true) => Ok(Style::Named(named_args.to_vec())),
        (true, false) => Ok(Style::Positional(positional_args.to_vec())),
        (true, true) => Ok(Style::None),
    }
}

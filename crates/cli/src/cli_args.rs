//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use crate::arguments::{determine, Provider, Style};
use clap::Parser;
use commandflow_core::error::Result;

/// Command-line arguments for the `cf` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use commandflow_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cf", "archive", "-p", "source=src"]);
/// assert_eq!(args.flow_id_or_index, Some("archive".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the flow definitions YAML.
    ///
    /// If not provided, defaults to `~/.commandflow/flows.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Path to the file that stores the history of rendered commands.
    ///
    /// If not provided, defaults to `~/.commandflow/history.yml`.
    #[arg(long, short = 'l')]
    pub history_path: Option<String>,

    /// Do not append the rendered command to the history file.
    #[arg(long, short = 's', action)]
    pub skip_record: bool,

    /// List the available flows and exit.
    #[arg(long, action)]
    pub list: bool,

    /// The flow ID or index to render.
    ///
    /// Can be either a flow ID or a numeric index (0-based position in the
    /// flow list).
    #[arg(num_args(1))]
    pub flow_id_or_index: Option<String>,

    /// Named parameters for the flow in the format key=value.
    ///
    /// Multiple parameters can be provided with repeated `-p` flags.
    /// Cannot be mixed with positional arguments.
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// Positional values for the flow placeholders, in order of appearance.
    ///
    /// Cannot be mixed with named parameters.
    #[arg(trailing_var_arg = true)]
    pub positional_arguments: Vec<String>,
}

impl Provider for Args {
    /// Determines the argument style based on the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if both named and positional arguments are provided.
    fn get_style(&self) -> Result<Style> {
        determine(&self.parameters, &self.positional_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cf"]);

        assert!(args.config_path.is_none());
        assert!(args.history_path.is_none());
        assert!(!args.skip_record);
        assert!(!args.list);
        assert!(args.flow_id_or_index.is_none());
        assert!(args.parameters.is_empty());
        assert!(args.positional_arguments.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["cf", "-c", "/custom/flows.yml", "-l", "/custom/h.yml", "-s"]);

        assert_eq!(args.config_path, Some("/custom/flows.yml".to_string()));
        assert_eq!(args.history_path, Some("/custom/h.yml".to_string()));
        assert!(args.skip_record);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "cf",
            "--config-path",
            "/custom/flows.yml",
            "--history-path",
            "/custom/h.yml",
            "--skip-record",
            "--list",
        ]);

        assert_eq!(args.config_path, Some("/custom/flows.yml".to_string()));
        assert_eq!(args.history_path, Some("/custom/h.yml".to_string()));
        assert!(args.skip_record);
        assert!(args.list);
    }

    #[test]
    fn test_args_named_parameters() {
        let args = Args::parse_from(["cf", "my-flow", "-p", "key1=value1", "--param", "key2=value2"]);

        assert_eq!(args.flow_id_or_index, Some("my-flow".to_string()));
        assert_eq!(args.parameters, vec!["key1=value1", "key2=value2"]);
    }

    #[test]
    fn test_style_provider_positional() {
        let args = Args::parse_from(["cf", "flow", "value1", "value2"]);
        let style = args.get_style().unwrap();
        assert_eq!(
            style,
            Style::Positional(vec!["value1".to_string(), "value2".to_string()])
        );
        assert_eq!(args.flow_id_or_index, Some("flow".to_string()));
    }

    #[test]
    fn test_style_provider_mixed_error() {
        let args = Args {
            config_path: None,
            history_path: None,
            skip_record: false,
            list: false,
            flow_id_or_index: None,
            parameters: vec!["key=value".to_string()],
            positional_arguments: vec!["positional".to_string()],
        };
        assert!(args.get_style().is_err());
    }
}

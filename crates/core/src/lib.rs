//! Commandflow Core Library
//!
//! This crate assembles command-line invocation strings from typed actions.
//! A [`command::Command`] holds an executable name and an ordered list of
//! [`action::Action`]s (string, boolean, list, positional and stdout
//! redirection) and renders them into one string on demand.
//!
//! # Key Features
//!
//! - **Actions**: Flag/value fragments with configurable dash prefixes
//! - **Command Rendering**: Deterministic, order-preserving command strings
//! - **Builders**: The [`builder::CommandBuilder`] trait for wrapping a specific CLI
//! - **Declarative Flows**: YAML flow definitions with `{placeholder}` templating
//! - **History**: Recorded command strings, optionally persisted to YAML
//!
//! Commands are rendered, never executed.
//!
//! # Examples
//!
//! ```
//! use commandflow_core::action::ActionOptions;
//! use commandflow_core::command::Command;
//!
//! let mut command = Command::new("help");
//! command.set_action(Some("a"), Some("apple"), 100);
//! command.stdout("test.out");
//! command.set_action_with(None, None, vec![1, 2, 3], &ActionOptions::positional());
//!
//! assert_eq!(command.command(), "help --apple 100 1 2 3 > test.out");
//! ```

pub mod action;
pub mod builder;
pub mod command;
pub mod config;
pub mod definitions;
pub mod error;
pub mod file_handling;
pub mod interpolation;
pub mod value;

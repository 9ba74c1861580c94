//! Commandflow CLI Library
//!
//! This crate provides the command-line interface for commandflow. It loads
//! declarative flows, fills their parameters from the command line, prints
//! the rendered command and keeps a history of what was rendered. Commands
//! are never executed.
//!
//! # Examples
//!
//! ```bash
//! # List the available flows
//! cf --list
//!
//! # Render a flow using its parameter defaults
//! cf archive
//!
//! # With named parameters
//! cf archive -p source=src -p log=tar.log
//!
//! # With positional arguments, in placeholder order
//! cf archive out.tar src tar.log
//! ```

pub mod arguments;
pub mod cli_args;
pub mod render;

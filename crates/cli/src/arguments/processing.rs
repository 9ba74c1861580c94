use crate::arguments::style::Style;
use commandflow_core::definitions::FlowDefinition;
use commandflow_core::error::Error::{MissingParameter, ParameterCountMismatch, ParameterFormat};
use commandflow_core::error::Result;
use indexmap::IndexSet;
use log::debug;
use std::collections::HashMap;

/// Turns the command-line arguments into parameter values for `flow`.
///
/// Values not given here fall back to the flow's parameter defaults when the
/// flow is built.
///
/// # Errors
///
/// Returns an error if:
/// - The flow's templates cannot be parsed
/// - A named parameter is not in `key=value` format or names no placeholder
/// - The number of positional values differs from the number of placeholders
pub fn process_command_line(
    argument_style: Style,
    flow: &FlowDefinition,
) -> Result<HashMap<String, String>> {
    let ordered_tokens = flow.get_ordered_context_variables()?;
    let mut values = HashMap::new();

    match argument_style {
        Style::None => {}
        Style::Named(named_params) => {
            process_named_parameters(&named_params, &ordered_tokens, &mut values)?;
        }
        Style::Positional(positional_params) => {
            process_positional_parameters(&positional_params, &ordered_tokens, &mut values)?;
        }
    }

    debug!("Parameters for flow `{flow}`: {values:?}");
    Ok(values)
}

/// Process named parameters in the format key=value
fn process_named_parameters(
    named_params: &[String],
    ordered_tokens: &IndexSet<String>,
    values: &mut HashMap<String, String>,
) -> Result<()> {
    for param_str in named_params {
        let Some((key, value)) = param_str.split_once('=') else {
            return Err(ParameterFormat(param_str.to_string()));
        };

        if key.is_empty() {
            return Err(ParameterFormat(param_str.to_string()));
        }

        if !ordered_tokens.contains(key) {
            return Err(MissingParameter(key.to_string()));
        }

        values.insert(key.to_string(), value.to_string());
    }

    Ok(())
}

/// Process positional parameters based on token order
fn process_positional_parameters(
    positional_params: &[String],
    ordered_tokens: &IndexSet<String>,
    values: &mut HashMap<String, String>,
) -> Result<()> {
    if positional_params.len() != ordered_tokens.len() {
        return Err(ParameterCountMismatch(
            ordered_tokens.len(),
            positional_params.len(),
        ));
    }

    for (token, value) in ordered_tokens.iter().zip(positional_params) {
        values.insert(token.clone(), value.clone());
    }

    Ok(())
}

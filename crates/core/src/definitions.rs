//! Declarative flows read from YAML.
//!
//! A flow describes one program invocation: its executable, its dashes, its
//! parameters and the actions rendered from them. Text values may contain
//! `{placeholder}` templates which are filled from the flow parameters when
//! the flow is built.
//!
//! ```yaml
//! - id: archive
//!   exe: tar
//!   parameters:
//!     - id: target
//!       default: out.tar
//!   actions:
//!     - short: c
//!       value: true
//!     - short: f
//!       value: "{target}"
//!     - long: exclude
//!       value: ["*.o", "*.tmp"]
//!       sep: ","
//!     - positional: true
//!       value: ["{source}"]
//!   stdout: "{log}"
//! ```

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionOptions, DEFAULT_SEPARATOR};
use crate::builder::CommandBuilder;
use crate::command::Command;
use crate::config::CommandConfig;
use crate::error::{Error, Result};
use crate::interpolation::{build_default_lookup, get_templates, get_tokens, interpolate};
use crate::value::{Scalar, Value};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParameterDefinition {
    pub id: String,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl Display for ParameterDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.id)?;

        if let Some(desc) = &self.description {
            write!(formatter, " ({desc})")?;
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ActionDefinition {
    pub short: Option<String>,
    pub long: Option<String>,
    pub value: serde_yaml::Value,
    #[serde(default)]
    pub positional: bool,
    pub sep: Option<String>,
}

impl Display for ActionDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.long, &self.short) {
            (Some(long), _) => formatter.write_str(long),
            (None, Some(short)) => formatter.write_str(short),
            (None, None) if self.positional => formatter.write_str("<positional>"),
            (None, None) => formatter.write_str("<unnamed>"),
        }
    }
}

impl ActionDefinition {
    fn options(&self) -> ActionOptions {
        ActionOptions {
            positional: self.positional,
            sep: self
                .sep
                .clone()
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        }
    }

    /// The raw template strings this action contains.
    fn template_strings(&self) -> Vec<&str> {
        match &self.value {
            serde_yaml::Value::String(text) => vec![text.as_str()],
            serde_yaml::Value::Sequence(items) => items
                .iter()
                .filter_map(serde_yaml::Value::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Converts the YAML value into an action, filling templates from `context`.
    fn to_action(&self, context: &HashMap<String, String>) -> Result<Action> {
        let value = match &self.value {
            serde_yaml::Value::Sequence(items) => Value::List(
                items
                    .iter()
                    .map(|item| self.to_scalar(item, context))
                    .collect::<Result<Vec<Scalar>>>()?,
            ),
            other => Value::from(self.to_scalar(other, context)?),
        };

        Ok(Action::from_value(
            self.short.as_deref(),
            self.long.as_deref(),
            value,
            &self.options(),
        ))
    }

    fn to_scalar(&self, value: &serde_yaml::Value, context: &HashMap<String, String>) -> Result<Scalar> {
        match value {
            serde_yaml::Value::Bool(flag) => Ok(Scalar::Bool(*flag)),
            serde_yaml::Value::String(text) => Ok(Scalar::Text(interpolate(text, context)?)),
            serde_yaml::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(Scalar::Int(int))
                } else if let Some(float) = number.as_f64() {
                    Ok(Scalar::Float(float))
                } else {
                    Err(self.unsupported(value))
                }
            }
            _ => Err(self.unsupported(value)),
        }
    }

    fn unsupported(&self, value: &serde_yaml::Value) -> Error {
        Error::UnsupportedValue(format!("{self}"), format!("{value:?}"))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FlowDefinition {
    pub id: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub config: CommandConfig,
    pub parameters: Option<Vec<ParameterDefinition>>,
    #[serde(default)]
    pub actions: Vec<ActionDefinition>,
    pub stdout: Option<String>,
}

impl Display for FlowDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.id, &self.description) {
            (Some(id), Some(desc)) => write!(formatter, "{id} ({desc})"),
            (Some(id), None) => formatter.write_str(id),
            (None, Some(desc)) => formatter.write_str(desc),
            (None, None) => formatter.write_str(&self.config.exe),
        }
    }
}

impl FlowDefinition {
    /// Creates an empty command configured with this flow's exe and dashes.
    #[must_use]
    pub fn command(&self) -> Command {
        Command::from_config(&self.config)
    }

    /// Every template string of the flow, in render order.
    fn template_strings(&self) -> Vec<&str> {
        let mut strings: Vec<&str> = self
            .actions
            .iter()
            .flat_map(ActionDefinition::template_strings)
            .collect();

        if let Some(stdout) = &self.stdout {
            strings.push(stdout);
        }

        strings
    }

    /// Placeholders used by the flow, in order of first appearance.
    ///
    /// # Errors
    ///
    /// Returns an error if any template string is malformed.
    pub fn get_ordered_context_variables(&self) -> Result<IndexSet<String>> {
        let strings = self.template_strings();
        let templates = get_templates(&strings)?;
        Ok(get_tokens(&templates))
    }

    /// Parameter defaults overlaid with `params`.
    #[must_use]
    pub fn context(&self, params: &HashMap<String, String>) -> HashMap<String, String> {
        let mut context = build_default_lookup(&self.parameters);
        context.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        context
    }
}

impl CommandBuilder for FlowDefinition {
    type Params = HashMap<String, String>;

    fn build(&self, params: &HashMap<String, String>) -> Result<Vec<Action>> {
        let context = self.context(params);
        debug!("Building flow `{self}` with context: {context:?}");

        let mut actions = self
            .actions
            .iter()
            .map(|definition| definition.to_action(&context))
            .collect::<Result<Vec<Action>>>()?;

        if let Some(stdout) = &self.stdout {
            actions.push(Action::stdout(&interpolate(stdout, &context)?));
        }

        Ok(actions)
    }
}

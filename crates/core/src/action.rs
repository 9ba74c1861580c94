//! Renderable fragments of a command line.
//!
//! Every [`Action`] renders to exactly one fragment, or to an empty string
//! when it should vanish from the command (a `false` boolean flag). Rendering
//! is a pure function of the action and the [`Dashes`] it is rendered with.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{Scalar, Value};

/// Default prefix for short flag names (`-a`).
pub const DEFAULT_SHORT_DASH: &str = "-";
/// Default prefix for long flag names (`--apple`).
pub const DEFAULT_LONG_DASH: &str = "--";
/// Default joiner between items of list and positional actions.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Prefix strings put in front of short and long flag names.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Dashes {
    pub short: String,
    pub long: String,
}

impl Dashes {
    pub fn new(short: &str, long: &str) -> Self {
        Self {
            short: short.to_string(),
            long: long.to_string(),
        }
    }
}

impl Default for Dashes {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_DASH, DEFAULT_LONG_DASH)
    }
}

/// The name of a flag. The long name wins when both are set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flag {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl Flag {
    pub fn new(short_name: Option<&str>, long_name: Option<&str>) -> Self {
        Self {
            short_name: short_name.map(ToString::to_string),
            long_name: long_name.map(ToString::to_string),
        }
    }

    /// True when neither a short nor a long name is present.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.short_name.is_none() && self.long_name.is_none()
    }

    /// Renders the prefixed name. An unnamed flag renders the bare short dash.
    #[must_use]
    pub fn render(&self, dashes: &Dashes) -> String {
        match (&self.long_name, &self.short_name) {
            (Some(long_name), _) => format!("{}{long_name}", dashes.long),
            (None, Some(short_name)) => format!("{}{short_name}", dashes.short),
            (None, None) => dashes.short.clone(),
        }
    }
}

/// Identity of an action, used when a builder re-applies its actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKey<'a> {
    Flag(&'a Flag),
    Positional,
    Stdout,
}

/// Options for `set_action` beyond the names and the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOptions {
    pub positional: bool,
    pub sep: String,
}

impl ActionOptions {
    /// Options that turn a list value into a positional action.
    #[must_use]
    pub fn positional() -> Self {
        Self {
            positional: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sep(mut self, sep: &str) -> Self {
        self.sep = sep.to_string();
        self
    }
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self {
            positional: false,
            sep: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// `<prefix><name> <value>`
    String { flag: Flag, value: Scalar },
    /// `<prefix><name>` when true, nothing when false.
    Boolean { flag: Flag, value: bool },
    /// `<prefix><name> <item><sep><item>...`
    List {
        flag: Flag,
        value: Vec<Scalar>,
        sep: String,
    },
    /// `<item><sep><item>...` without any flag.
    Positional { value: Vec<Scalar>, sep: String },
    /// `> <target>`, always rendered after every other action.
    Stdout { target: String },
}

impl Action {
    pub fn string(short_name: Option<&str>, long_name: Option<&str>, value: impl Into<Scalar>) -> Self {
        Action::String {
            flag: Flag::new(short_name, long_name),
            value: value.into(),
        }
    }

    pub fn boolean(short_name: Option<&str>, long_name: Option<&str>, value: bool) -> Self {
        Action::Boolean {
            flag: Flag::new(short_name, long_name),
            value,
        }
    }

    pub fn list<T: Into<Scalar>>(
        short_name: Option<&str>,
        long_name: Option<&str>,
        value: Vec<T>,
    ) -> Self {
        Action::List {
            flag: Flag::new(short_name, long_name),
            value: value.into_iter().map(Into::into).collect(),
            sep: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn positional<T: Into<Scalar>>(value: Vec<T>) -> Self {
        Action::Positional {
            value: value.into_iter().map(Into::into).collect(),
            sep: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn stdout(target: &str) -> Self {
        Action::Stdout {
            target: target.to_string(),
        }
    }

    /// Replaces the item separator of list and positional actions.
    /// Other actions are returned unchanged.
    #[must_use]
    pub fn with_sep(mut self, new_sep: &str) -> Self {
        if let Action::List { sep, .. } | Action::Positional { sep, .. } = &mut self {
            *sep = new_sep.to_string();
        }
        self
    }

    /// Picks the action kind from the value: booleans become presence flags,
    /// lists become list actions (positional ones when asked to) and anything
    /// else becomes a flag followed by its text.
    pub fn from_value(
        short_name: Option<&str>,
        long_name: Option<&str>,
        value: Value,
        options: &ActionOptions,
    ) -> Self {
        match value {
            Value::Bool(value) => Action::boolean(short_name, long_name, value),
            Value::List(value) if options.positional => Action::Positional {
                value,
                sep: options.sep.clone(),
            },
            Value::List(value) => Action::List {
                flag: Flag::new(short_name, long_name),
                value,
                sep: options.sep.clone(),
            },
            Value::Text(text) => Action::string(short_name, long_name, text),
            Value::Int(int) => Action::string(short_name, long_name, int),
            Value::Float(float) => Action::string(short_name, long_name, float),
        }
    }

    #[must_use]
    pub fn flag(&self) -> Option<&Flag> {
        match self {
            Action::String { flag, .. } | Action::Boolean { flag, .. } | Action::List { flag, .. } => {
                Some(flag)
            }
            Action::Positional { .. } | Action::Stdout { .. } => None,
        }
    }

    #[must_use]
    pub fn key(&self) -> ActionKey<'_> {
        match self {
            Action::Positional { .. } => ActionKey::Positional,
            Action::Stdout { .. } => ActionKey::Stdout,
            Action::String { flag, .. } | Action::Boolean { flag, .. } | Action::List { flag, .. } => {
                ActionKey::Flag(flag)
            }
        }
    }

    #[must_use]
    pub fn is_stdout(&self) -> bool {
        matches!(self, Action::Stdout { .. })
    }

    /// Renders the fragment. An empty string means the action contributes
    /// nothing to the command.
    #[must_use]
    pub fn render(&self, dashes: &Dashes) -> String {
        match self {
            Action::String { flag, value } => format!("{} {value}", flag.render(dashes)),
            Action::Boolean { flag, value } => {
                if *value {
                    flag.render(dashes)
                } else {
                    String::new()
                }
            }
            Action::List { flag, value, sep } => {
                let name = flag.render(dashes);
                if value.is_empty() {
                    name
                } else {
                    format!("{name} {}", join(value, sep))
                }
            }
            Action::Positional { value, sep } => join(value, sep),
            Action::Stdout { target } => format!("> {target}"),
        }
    }
}

impl Display for Action {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.render(&Dashes::default()))
    }
}

fn join(items: &[Scalar], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(sep)
}

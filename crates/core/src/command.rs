//! The command container and renderer.
//!
//! A [`Command`] owns an executable name, the dash configuration and an
//! ordered list of [`Action`]s. [`Command::command`] renders them into one
//! string on every call:
//!
//! ```text
//! <exe> [<fragment> ...] [> <stdout-target> ...]
//! ```
//!
//! Fragments that render empty are dropped along with their separator.
//! A `Command` is meant for a single owner; it carries no locking.

use log::{debug, warn};

use crate::action::{Action, ActionOptions, Dashes};
use crate::builder::CommandBuilder;
use crate::config::CommandConfig;
use crate::error::Result;
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    exe: String,
    dashes: Dashes,
    actions: Vec<Action>,
    records: Vec<String>,
    /// Positions in `actions` written by the last `input` run.
    input_slots: Vec<usize>,
}

impl Command {
    /// Creates a command with the default dashes (`-` and `--`).
    pub fn new(exe: &str) -> Self {
        Self {
            exe: exe.to_string(),
            ..Self::default()
        }
    }

    pub fn with_dashes(exe: &str, short_dash: &str, long_dash: &str) -> Self {
        Self {
            exe: exe.to_string(),
            dashes: Dashes::new(short_dash, long_dash),
            ..Self::default()
        }
    }

    pub fn from_config(config: &CommandConfig) -> Self {
        Self::with_dashes(&config.exe, &config.short_dash, &config.long_dash)
    }

    #[must_use]
    pub fn exe(&self) -> &str {
        &self.exe
    }

    #[must_use]
    pub fn dashes(&self) -> &Dashes {
        &self.dashes
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Previously recorded command strings, oldest first.
    #[must_use]
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Appends the action chosen by the type of `value`.
    ///
    /// Booleans become presence flags, lists become list actions and every
    /// other value becomes a flag followed by its text. Existing actions are
    /// never replaced, so repeated names render repeatedly.
    pub fn set_action(
        &mut self,
        short_name: Option<&str>,
        long_name: Option<&str>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.set_action_with(short_name, long_name, value, &ActionOptions::default())
    }

    /// Like [`Command::set_action`], with control over positional rendering
    /// and the list separator.
    pub fn set_action_with(
        &mut self,
        short_name: Option<&str>,
        long_name: Option<&str>,
        value: impl Into<Value>,
        options: &ActionOptions,
    ) -> &mut Self {
        let action = Action::from_value(short_name, long_name, value.into(), options);
        self.push(action)
    }

    /// Appends an already built action.
    pub fn push(&mut self, action: Action) -> &mut Self {
        if action.flag().is_some_and(|flag| flag.is_unnamed()) {
            warn!("Action {action:?} has neither a short nor a long name");
        }

        self.actions.push(action);
        self
    }

    /// Redirects standard output to `target`. Redirections render after all
    /// other actions; calling this twice renders two redirections.
    pub fn stdout(&mut self, target: &str) -> &mut Self {
        self.push(Action::stdout(target))
    }

    pub fn set_exe(&mut self, exe: &str) -> &mut Self {
        self.exe = exe.to_string();
        self
    }

    /// Drops every action. The executable and the records are kept.
    pub fn clear(&mut self) -> &mut Self {
        self.actions.clear();
        self.input_slots.clear();
        self
    }

    /// Appends the current rendering to the records.
    pub fn record(&mut self) -> &mut Self {
        let command = self.command();
        debug!("Recording command: `{command}`");
        self.records.push(command);
        self
    }

    /// Runs `builder` and applies the actions it returns.
    ///
    /// The n-th returned action with a given key (its flag names, or the
    /// positional or stdout kind) replaces, in place, the n-th action with
    /// that key written by the previous `input` run. Actions without such a
    /// counterpart are appended. Running a builder again with new parameters
    /// therefore overwrites the values of the previous run, while repeated
    /// keys within one run are all kept in order.
    ///
    /// # Errors
    ///
    /// Returns the builder's error. The command is left untouched in that case.
    pub fn input<B: CommandBuilder>(&mut self, builder: &B, params: &B::Params) -> Result<()> {
        let actions = builder.build(params)?;

        let mut previous_slots = std::mem::take(&mut self.input_slots);
        let mut slots = Vec::with_capacity(actions.len());

        for action in actions {
            let reused = previous_slots
                .iter()
                .position(|&slot| self.actions[slot].key() == action.key())
                .map(|position| previous_slots.remove(position));

            match reused {
                Some(slot) => {
                    self.actions[slot] = action;
                    slots.push(slot);
                }
                None => {
                    self.push(action);
                    slots.push(self.actions.len() - 1);
                }
            }
        }

        // Slots of the previous run that were not rewritten still belong to it
        slots.extend(previous_slots);
        slots.sort_unstable();
        self.input_slots = slots;

        Ok(())
    }

    /// Renders the executable followed by every non-empty action fragment.
    #[must_use]
    pub fn command(&self) -> String {
        let (redirects, others): (Vec<&Action>, Vec<&Action>) =
            self.actions.iter().partition(|action| action.is_stdout());

        let mut parts = vec![self.exe.clone()];
        parts.extend(
            others
                .into_iter()
                .chain(redirects)
                .map(|action| action.render(&self.dashes))
                .filter(|fragment| !fragment.is_empty()),
        );

        parts.join(" ")
    }
}

//! The extension point for wrapping a concrete CLI.

use crate::action::Action;
use crate::error::Result;

/// Translates typed parameters into the actions of one invocation.
///
/// Implementors know the argument shape of a specific program; the
/// [`Command`](crate::command::Command) container stays unaware of it and
/// only applies the returned actions through
/// [`Command::input`](crate::command::Command::input).
///
/// # Examples
///
/// ```
/// use commandflow_core::action::Action;
/// use commandflow_core::builder::CommandBuilder;
/// use commandflow_core::command::Command;
/// use commandflow_core::error::Result;
///
/// struct Help;
///
/// impl CommandBuilder for Help {
///     type Params = str;
///
///     fn build(&self, topic: &str) -> Result<Vec<Action>> {
///         Ok(vec![Action::string(Some("a"), Some("apple"), topic)])
///     }
/// }
///
/// let mut command = Command::new("help");
/// command.input(&Help, "abc")?;
/// assert_eq!(command.command(), "help --apple abc");
/// # Ok::<(), commandflow_core::error::Error>(())
/// ```
pub trait CommandBuilder {
    type Params: ?Sized;

    /// Produces the actions for `params`, in render order.
    ///
    /// # Errors
    ///
    /// Returns an error when the parameters cannot be turned into actions.
    fn build(&self, params: &Self::Params) -> Result<Vec<Action>>;
}

impl<B: CommandBuilder + ?Sized> CommandBuilder for &B {
    type Params = B::Params;

    fn build(&self, params: &Self::Params) -> Result<Vec<Action>> {
        (**self).build(params)
    }
}

//! Turning parsed arguments into a rendered command.

use itertools::Itertools;
use log::{debug, info};

use commandflow_core::command::Command;
use commandflow_core::definitions::FlowDefinition;
use commandflow_core::error::{Error, Result};
use commandflow_core::file_handling::find_flow;

use crate::arguments::{process_command_line, Provider};

/// One line per flow: `<index>: <flow>`, followed by its parameters.
#[must_use]
pub fn list_flows(flows: &[FlowDefinition]) -> String {
    flows
        .iter()
        .enumerate()
        .map(|(index, flow)| match &flow.parameters {
            Some(parameters) if !parameters.is_empty() => {
                format!("{index}: {flow} {}", parameters.iter().join(", "))
            }
            _ => format!("{index}: {flow}"),
        })
        .join("\n")
}

/// Selects the flow named by `flow_id_or_index`, fills its parameters from
/// `provider` and returns the command with the flow applied and recorded.
///
/// # Errors
///
/// Returns an error if no flow was selected or found, the arguments are
/// invalid, or the flow cannot be built.
pub fn render_flow<P: Provider>(
    flows: &[FlowDefinition],
    flow_id_or_index: Option<&str>,
    provider: &P,
) -> Result<Command> {
    let Some(flow_id_or_index) = flow_id_or_index else {
        return Err(Error::Misc(
            "No flow given. Use --list to see the available flows.".to_string(),
        ));
    };

    let flow = find_flow(flows, flow_id_or_index)?;
    debug!("Selected flow: {flow}");

    let params = process_command_line(provider.get_style()?, flow)?;

    let mut command = flow.command();
    command.input(flow, &params)?;
    command.record();
    info!("Rendered flow `{flow}`: {}", command.command());

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::Style;

    struct Fixed(Style);

    impl Provider for Fixed {
        fn get_style(&self) -> Result<Style> {
            Ok(self.0.clone())
        }
    }

    fn flows() -> Vec<FlowDefinition> {
        let first = FlowDefinition {
            id: Some("list".to_string()),
            description: Some("List files".to_string()),
            config: commandflow_core::config::CommandConfig::new("ls"),
            parameters: None,
            actions: Vec::new(),
            stdout: None,
        };
        let mut second = first.clone();
        second.id = Some("cat".to_string());
        second.description = None;
        second.config.exe = "cat".to_string();
        second.parameters = Some(vec![commandflow_core::definitions::ParameterDefinition {
            id: "file".to_string(),
            default: Some("a.txt".to_string()),
            description: Some("file to print".to_string()),
        }]);
        vec![first, second]
    }

    #[test]
    fn test_list_flows() {
        assert_eq!(
            list_flows(&flows()),
            "0: list (List files)\n1: cat `file` (file to print)"
        );
    }

    #[test]
    fn test_render_flow_records_command() {
        let command = render_flow(&flows(), Some("0"), &Fixed(Style::None)).unwrap();
        assert_eq!(command.command(), "ls");
        assert_eq!(command.records(), &["ls".to_string()]);
    }

    #[test]
    fn test_render_flow_without_selection() {
        let result = render_flow(&flows(), None, &Fixed(Style::None));
        assert!(matches!(result, Err(Error::Misc(_))));
    }

    #[test]
    fn test_render_flow_unknown() {
        let result = render_flow(&flows(), Some("nope"), &Fixed(Style::None));
        assert!(matches!(result, Err(Error::FlowNotFound(_))));
    }
}

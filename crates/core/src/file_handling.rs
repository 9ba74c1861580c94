//! File handling and validation for commandflow files.
//!
//! This module provides functions for reading flow definitions and for
//! reading and writing the history of recorded commands, along with
//! validation of flow and parameter IDs.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::debug;

use crate::definitions::{FlowDefinition, ParameterDefinition};
use crate::error::Error::{
    EmptyId, IdWithColon, IdWithSpace, NonUniqueFlowId, NonUniqueParameterId, NotFoundParameterId,
    NumericId,
};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads the recorded command history from disk.
///
/// Returns `None` if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or does not
/// contain a YAML list of strings.
pub fn get_records(history_path: &str) -> Result<Option<Vec<String>>> {
    if !Path::new(history_path).exists() {
        return Ok(None);
    }

    let reader = get_reader("history", history_path)?;

    let records: Vec<String> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "history".to_string(),
            history_path.to_string(),
            e,
        )
    })?;

    Ok(Some(records))
}

/// Writes `records` to disk, replacing any existing history.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_records(history_path: &str, records: &[String]) -> Result<()> {
    let writer = File::create(history_path)
        .map_err(|e| Error::io_error("history".to_string(), history_path.to_string(), e))?;

    serde_yaml::to_writer(writer, records).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "history".to_string(),
            history_path.to_string(),
            e,
        )
    })
}

/// Appends `records` to the history on disk, creating it when missing.
///
/// # Errors
///
/// Returns an error if the existing history cannot be read or the updated
/// history cannot be written.
pub fn append_records(history_path: &str, records: &[String]) -> Result<()> {
    let mut history = get_records(history_path)?.unwrap_or_default();
    history.extend_from_slice(records);
    debug!("Writing {} records to `{history_path}`", history.len());

    write_records(history_path, &history)
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    if id.contains(':') {
        return Err(IdWithColon(id.to_string()));
    }

    if id.chars().all(char::is_numeric) {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_parameters(flow: &FlowDefinition, parameters: &[ParameterDefinition]) -> Result<()> {
    let mut ids = HashSet::new();
    for parameter in parameters {
        validate_id(&parameter.id)?;

        if !ids.insert(parameter.id.clone()) {
            return Err(NonUniqueParameterId(format!("{flow}"), parameter.id.clone()));
        }
    }

    let flow_variables = flow.get_ordered_context_variables()?;

    for parameter in parameters {
        if !flow_variables.contains(&parameter.id) {
            return Err(NotFoundParameterId(format!("{flow}"), parameter.id.clone()));
        }
    }

    Ok(())
}

fn validate_flows(flows: &[FlowDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for flow in flows {
        if let Some(id) = &flow.id {
            validate_id(id)?;

            if !ids.insert(id.clone()) {
                return Err(NonUniqueFlowId(id.clone()));
            }
        }

        if let Some(parameters) = &flow.parameters {
            validate_parameters(flow, parameters)?;
        }
    }

    Ok(())
}

/// Loads and validates flow definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file contains no flows
/// - Flow or parameter IDs are invalid or non-unique
/// - Parameters reference placeholders that don't exist in their flow
///
/// # Examples
///
/// ```no_run
/// use commandflow_core::file_handling::get_flow_definitions;
///
/// let flows = get_flow_definitions("~/.commandflow/flows.yml")?;
/// println!("Loaded {} flows", flows.len());
/// # Ok::<(), commandflow_core::error::Error>(())
/// ```
pub fn get_flow_definitions(config_path: &str) -> Result<Vec<FlowDefinition>> {
    let config_reader = get_reader("flows", config_path)?;

    let flows: Vec<FlowDefinition> = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "flows".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if flows.is_empty() {
        return Err(Error::empty_flow_definition(config_path.to_string()));
    }

    validate_flows(&flows)?;
    debug!("Loaded {} flows from `{config_path}`", flows.len());

    Ok(flows)
}

/// Finds a flow by its ID, or by its index when `id_or_index` is numeric.
///
/// # Errors
///
/// Returns an error if no flow has the ID or the index is out of range.
pub fn find_flow<'a>(flows: &'a [FlowDefinition], id_or_index: &str) -> Result<&'a FlowDefinition> {
    if let Ok(index) = id_or_index.parse::<usize>() {
        return flows.get(index).ok_or(Error::FlowIndexOutOfRange(index));
    }

    flows
        .iter()
        .find(|flow| flow.id.as_deref() == Some(id_or_index))
        .ok_or_else(|| Error::FlowNotFound(id_or_index.to_string()))
}

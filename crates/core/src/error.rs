use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No flows were found in the flow definition YAML. Is `{}` empty?", .path)]
    EmptyFlowDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing placeholder string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering placeholder template string: {}", .0)]
    Render(#[from] RenderError),

    #[error("Unsupported value for action {}: {}", .0, .1)]
    UnsupportedValue(String, String),

    #[error("Misc error: {}", .0)]
    Misc(String),

    #[error("Flow not found: `{}`", .0)]
    FlowNotFound(String),

    #[error("Flow index out of range: {}", .0)]
    FlowIndexOutOfRange(usize),

    #[error("Found a non-unique flow ID: `{}`", .0)]
    NonUniqueFlowId(String),

    #[error("Found a non-unique parameter ID on flow {}: `{}`", .0, .1)]
    NonUniqueParameterId(String, String),

    #[error("Found a parameter with ID that is not present in flow {}: `{}`", .0, .1)]
    NotFoundParameterId(String, String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID may not contain a colon (reserved for future use)", .0)]
    IdWithColon(String),

    #[error("Invalid ID `{}`: ID cannot be purely numeric", .0)]
    NumericId(String),

    #[error("Parameter `{}` is not a placeholder of the selected flow", .0)]
    MissingParameter(String),

    #[error("Invalid parameter format `{}`: expected key=value", .0)]
    ParameterFormat(String),

    #[error("Expected {} positional arguments but {} were given", .0, .1)]
    ParameterCountMismatch(usize, usize),

    #[error("Named parameters and positional arguments cannot be mixed")]
    MixedParameterMode,
}

impl Error {
    pub fn empty_flow_definition(path: String) -> Self {
        Self::EmptyFlowDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

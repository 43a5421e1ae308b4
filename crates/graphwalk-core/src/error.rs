//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph, unknown node)

mod macros;

use thiserror::Error;

/// Exit codes reported by the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or searching a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("duplicate node: {id}")]
    DuplicateNode { id: String },

    #[error("edge {from} -> {to} references undeclared node {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("edge {from} -> {to} already has weight {existing}, refusing weight {requested}")]
    ConflictingEdge {
        from: String,
        to: String,
        existing: f64,
        requested: f64,
    },

    #[error("invalid weight for edge {from} -> {to}: {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("node has no position: {id}")]
    MissingPosition { id: String },

    #[error("no edge between consecutive nodes {from} -> {to}")]
    NotAnEdge { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("recursion depth limit of {limit} exceeded")]
    RecursionLimit { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node id missing from the graph
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        GraphError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for an edge whose endpoint was never declared
    pub fn dangling_edge(from: &str, to: &str, missing: &str) -> Self {
        GraphError::DanglingEdge {
            from: from.to_string(),
            to: to.to_string(),
            missing: missing.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::DuplicateNode { .. }
            | GraphError::DanglingEdge { .. }
            | GraphError::ConflictingEdge { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::MissingPosition { .. }
            | GraphError::NotAnEdge { .. } => ExitCode::Data,

            GraphError::RecursionLimit { .. }
            | GraphError::Io(_)
            | GraphError::Yaml(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::DanglingEdge { .. } => "dangling_edge",
            GraphError::ConflictingEdge { .. } => "conflicting_edge",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::MissingPosition { .. } => "missing_position",
            GraphError::NotAnEdge { .. } => "not_an_edge",
            GraphError::RecursionLimit { .. } => "recursion_limit",
            GraphError::Io(_) => "io_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;

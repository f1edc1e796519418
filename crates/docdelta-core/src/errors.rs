use docdelta_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using DocDeltaError
pub type Result<T> = std::result::Result<T, DocDeltaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The diff engine itself is total and never produces one of these. They
/// classify failures at the boundaries around it: input-size policy,
/// invariant checks, the explanation collaborator and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Alignment table for the pair would exceed the configured cell budget
    InputTooLarge,

    // Verification
    /// A diff output failed a reconstruction or compaction check
    InvariantViolation,

    // Collaborators
    /// No explanation provider is configured, or it declined the request
    ExplanationUnavailable,
    ExternalService,

    // Integration/IO
    InvalidConfig,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InputTooLarge => "ERR_INPUT_TOO_LARGE",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::ExplanationUnavailable => "ERR_EXPLANATION_UNAVAILABLE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind for programmatic handling plus optional context
/// (operation, correlation ids, file path, row index) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    path: Option<String>,
    row: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            request_id: None,
            trace_id: None,
            path: None,
            row: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add the file the failing input came from
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add the aligned-row index the error refers to
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(row) = self.row {
            write!(f, " (row: {})", row)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for the boundaries around the diff engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocDeltaError {
    /// Alignment table would exceed the caller's cell budget
    #[error("Input too large: alignment needs {cells} cells, limit is {limit}")]
    InputTooLarge { cells: u64, limit: u64 },

    /// Output broke a reconstruction or compaction invariant
    ///
    /// `row` is set when the check ran over aligned rows.
    #[error("Invariant violated ({invariant}): {detail}")]
    InvariantViolation {
        invariant: String,
        row: Option<usize>,
        detail: String,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<DocDeltaError> for ExError {
    fn from(err: DocDeltaError) -> Self {
        match err {
            DocDeltaError::InputTooLarge { cells, limit } => {
                ExError::new(ExErrorKind::InputTooLarge).with_message(format!(
                    "Alignment needs {} cells, limit is {}",
                    cells, limit
                ))
            }

            DocDeltaError::InvariantViolation {
                invariant,
                row,
                detail,
            } => {
                let err = ExError::new(ExErrorKind::InvariantViolation)
                    .with_op(invariant)
                    .with_message(detail);
                match row {
                    Some(row) => err.with_row(row),
                    None => err,
                }
            }

            DocDeltaError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            DocDeltaError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            DocDeltaError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to DocDeltaError
impl From<serde_json::Error> for DocDeltaError {
    fn from(err: serde_json::Error) -> Self {
        DocDeltaError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_error_kind_codes() {
        let cases = [
            (ExErrorKind::InputTooLarge, "ERR_INPUT_TOO_LARGE"),
            (ExErrorKind::InvariantViolation, "ERR_INVARIANT_VIOLATION"),
            (
                ExErrorKind::ExplanationUnavailable,
                "ERR_EXPLANATION_UNAVAILABLE",
            ),
            (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read_input")
            .with_path("a.txt")
            .with_message("file not found");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_IO]"));
        assert!(rendered.contains("'read_input'"));
        assert!(rendered.contains("(path: a.txt)"));
    }

    #[test]
    fn test_display_includes_correlation_ids() {
        let err = ExError::new(ExErrorKind::Io)
            .with_request_id(RequestId::from_string("req-1".to_string()))
            .with_trace_id(TraceId::from_string("trace-9".to_string()));
        let rendered = err.to_string();
        assert!(rendered.ends_with("(request_id: req-1) (trace_id: trace-9)"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error as _;
        let inner = ExError::new(ExErrorKind::ExternalService).with_message("timeout");
        let outer = ExError::new(ExErrorKind::ExplanationUnavailable).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::ExternalService)
        );
        assert!(outer.source().is_some());
    }
}

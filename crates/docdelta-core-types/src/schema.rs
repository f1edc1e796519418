//! Canonical schema constants for structured logging
//!
//! Every event emitted by the logging macros uses these keys so that log
//! consumers can filter on a fixed vocabulary.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Comparison sizes
pub const FIELD_TOKENS_A: &str = "tokens_a";
pub const FIELD_TOKENS_B: &str = "tokens_b";
pub const FIELD_LCS_LEN: &str = "lcs_len";
pub const FIELD_RECORDS: &str = "records";
pub const FIELD_ROWS: &str = "rows";
pub const FIELD_CELLS: &str = "cells";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

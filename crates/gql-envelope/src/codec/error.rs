//! CodecError - エンコード/デコードのエラー型
//!
//! デコード失敗は必ず呼び出し元へそのまま返し、部分的に埋まった
//! `GraphQlRequest` を返すことはありません。

use serde_json::Value;
use thiserror::Error;

/// Coarse classification, for callers that map failures onto transport
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedJson,
    MissingField,
    TypeMismatch,
    Limit,
    Encode,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` has wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("batch contains no requests")]
    EmptyBatch,

    #[error("batch of {len} requests exceeds limit of {limit}")]
    BatchTooLarge { len: usize, limit: usize },

    #[error("batch element {index}: {source}")]
    InBatch {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodecError {
    /// Batch errors report the kind of the element that failed.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::MalformedJson(_) => ErrorKind::MalformedJson,
            CodecError::MissingField { .. } => ErrorKind::MissingField,
            CodecError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CodecError::PayloadTooLarge { .. }
            | CodecError::EmptyBatch
            | CodecError::BatchTooLarge { .. } => ErrorKind::Limit,
            CodecError::InBatch { source, .. } => source.kind(),
            CodecError::Encode(_) => ErrorKind::Encode,
        }
    }

    pub(crate) fn type_mismatch(field: &'static str, expected: &'static str, found: &Value) -> Self {
        CodecError::TypeMismatch {
            field,
            expected,
            found: json_type_name(found),
        }
    }
}

/// JSON type name as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

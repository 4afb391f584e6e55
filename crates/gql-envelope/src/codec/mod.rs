//! RequestCodec - `GraphQlRequest` と JSON テキストの相互変換
//!
//! # エンコード
//! 1. serde_json でコンパクトな JSON に変換（空白なし）
//! 2. キー順は `query`, `operationName`, `variables` 固定、`None` は省略
//!
//! # デコード
//! 1. サイズ上限のチェック（設定時のみ）
//! 2. `serde_json::Value` にパース（失敗 → `MalformedJson`）
//! 3. フィールドごとに型を確認して組み立て（`MissingField` / `TypeMismatch`）
//!
//! 未知のキーは無視します。どの段階で失敗しても部分的な値は返しません。

pub mod config;
pub mod error;

use serde_json::{Map, Value};

use crate::domain::{GraphQlRequest, RequestPayload, Variables};

pub use self::config::{CodecConfig, CodecConfigBuilder};
pub use self::error::{CodecError, ErrorKind, json_type_name};

const QUERY: &str = "query";
const OPERATION_NAME: &str = "operationName";
const VARIABLES: &str = "variables";
/// Field name reported when the top-level value is not an object.
const ROOT: &str = "$";

/// Stateless encoder/decoder for request envelopes.
///
/// Holds only its immutable configuration, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct RequestCodec {
    config: CodecConfig,
}

impl RequestCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compact JSON text for one envelope.
    pub fn encode(&self, request: &GraphQlRequest) -> Result<String, CodecError> {
        let text = serde_json::to_string(request).map_err(CodecError::Encode)?;
        tracing::trace!(bytes = text.len(), "encoded graphql request");
        Ok(text)
    }

    pub fn encode_to_vec(&self, request: &GraphQlRequest) -> Result<Vec<u8>, CodecError> {
        let bytes = serde_json::to_vec(request).map_err(CodecError::Encode)?;
        tracing::trace!(bytes = bytes.len(), "encoded graphql request");
        Ok(bytes)
    }

    /// A batch encodes as a JSON array of envelopes. An empty batch fails
    /// with `EmptyBatch`, matching what `decode_payload` accepts.
    pub fn encode_payload(&self, payload: &RequestPayload) -> Result<String, CodecError> {
        if payload.is_empty() {
            return Err(CodecError::EmptyBatch);
        }
        let text = serde_json::to_string(payload).map_err(CodecError::Encode)?;
        tracing::trace!(
            bytes = text.len(),
            requests = payload.len(),
            "encoded graphql payload"
        );
        Ok(text)
    }

    pub fn decode(&self, input: &str) -> Result<GraphQlRequest, CodecError> {
        self.decode_slice(input.as_bytes())
    }

    pub fn decode_slice(&self, input: &[u8]) -> Result<GraphQlRequest, CodecError> {
        let result = self
            .parse(input)
            .and_then(|value| self.request_from_value(value));
        observe(input.len(), result)
    }

    /// Accepts either a single envelope object or a non-empty array of them.
    pub fn decode_payload(&self, input: &str) -> Result<RequestPayload, CodecError> {
        self.decode_payload_slice(input.as_bytes())
    }

    pub fn decode_payload_slice(&self, input: &[u8]) -> Result<RequestPayload, CodecError> {
        let result = self
            .parse(input)
            .and_then(|value| self.payload_from_value(value));
        observe(input.len(), result)
    }

    fn parse(&self, input: &[u8]) -> Result<Value, CodecError> {
        if let Some(limit) = self.config.max_payload_bytes {
            if input.len() > limit {
                return Err(CodecError::PayloadTooLarge {
                    size: input.len(),
                    limit,
                });
            }
        }
        serde_json::from_slice(input).map_err(CodecError::MalformedJson)
    }

    fn payload_from_value(&self, value: Value) -> Result<RequestPayload, CodecError> {
        let items = match value {
            Value::Array(items) => items,
            single => return self.request_from_value(single).map(RequestPayload::Single),
        };

        if items.is_empty() {
            return Err(CodecError::EmptyBatch);
        }
        if let Some(limit) = self.config.max_batch_len {
            if items.len() > limit {
                return Err(CodecError::BatchTooLarge {
                    len: items.len(),
                    limit,
                });
            }
        }

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                self.request_from_value(item)
                    .map_err(|source| CodecError::InBatch {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RequestPayload::Batch)
    }

    fn request_from_value(&self, value: Value) -> Result<GraphQlRequest, CodecError> {
        let mut object = match value {
            Value::Object(object) => object,
            other => return Err(CodecError::type_mismatch(ROOT, "object", &other)),
        };

        // null is never a valid query, so it counts as missing
        let query = match object.remove(QUERY) {
            None | Some(Value::Null) => return Err(CodecError::MissingField { field: QUERY }),
            Some(Value::String(query)) => query,
            Some(other) => return Err(CodecError::type_mismatch(QUERY, "string", &other)),
        };

        let operation_name = match self.take_optional(&mut object, OPERATION_NAME) {
            None => None,
            Some(Value::String(name)) => Some(name),
            Some(other) => {
                return Err(CodecError::type_mismatch(OPERATION_NAME, "string", &other));
            }
        };

        let variables = match self.take_optional(&mut object, VARIABLES) {
            None => None,
            Some(Value::Object(map)) => Some(Variables::from(map)),
            Some(other) => return Err(CodecError::type_mismatch(VARIABLES, "object", &other)),
        };

        Ok(GraphQlRequest {
            query,
            operation_name,
            variables,
        })
    }

    /// Removes an optional field; `null` reads as absent unless configured otherwise.
    fn take_optional(&self, object: &mut Map<String, Value>, field: &str) -> Option<Value> {
        match object.remove(field) {
            Some(Value::Null) if self.config.null_as_absent => None,
            other => other,
        }
    }
}

/// Backs the serde `Deserialize` impl of `GraphQlRequest`, so embedding the
/// envelope in a larger structure follows the same field rules as `decode`.
impl TryFrom<Value> for GraphQlRequest {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        RequestCodec::default().request_from_value(value)
    }
}

fn observe<T>(bytes: usize, result: Result<T, CodecError>) -> Result<T, CodecError> {
    match &result {
        Ok(_) => tracing::trace!(bytes, "decoded graphql request"),
        Err(err) => tracing::debug!(
            bytes,
            kind = ?err.kind(),
            error = %err,
            "rejected graphql request"
        ),
    }
    result
}

/// Encodes with the default configuration.
pub fn encode(request: &GraphQlRequest) -> Result<String, CodecError> {
    RequestCodec::default().encode(request)
}

/// Decodes with the default configuration.
pub fn decode(input: &str) -> Result<GraphQlRequest, CodecError> {
    RequestCodec::default().decode(input)
}

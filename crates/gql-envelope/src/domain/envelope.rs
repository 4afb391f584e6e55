//! GraphQlRequest - GraphQL リクエストのエンベロープ
//!
//! クエリ文書そのものは不透明な文字列として扱い、パースも検証もしません。
//!
//! # ワイヤ形式
//! - 最小: `{"query":"{ foo }"}`
//! - 完全: `{"query":"...","operationName":"FooQuery","variables":{"input":1}}`
//!
//! キーの順序は `query`, `operationName`, `variables` 固定で、`None` の
//! フィールドは `null` を出さずにキーごと省略します。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::variables::Variables;

/// The outer JSON object of a GraphQL-over-HTTP request.
///
/// Field declaration order is the encoding order. Deserializing goes through
/// `TryFrom<Value>`, i.e. the default `RequestCodec` rules: unknown keys are
/// ignored, `"query": null` is a missing field, and a repeated key keeps its
/// last value.
///
/// # 使用例
/// ```
/// use gql_envelope::GraphQlRequest;
///
/// let request = GraphQlRequest::new("query FooQuery($input: Int) { foo($input) }")
///     .with_operation_name("FooQuery")
///     .with_variable("input", 1);
/// assert_eq!(request.operation_name.as_deref(), Some("FooQuery"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct GraphQlRequest {
    /// Raw query document.
    pub query: String,

    /// `None` means "not specified", which is distinct from `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Adds one variable, creating the mapping on first use.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables
            .get_or_insert_with(Variables::new)
            .insert(name, value);
        self
    }

    /// `true` only when a non-empty variables mapping is present.
    pub fn has_variables(&self) -> bool {
        self.variables.as_ref().is_some_and(|v| !v.is_empty())
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.as_ref().and_then(|v| v.get(name))
    }
}

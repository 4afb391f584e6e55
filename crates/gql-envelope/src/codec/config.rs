//! CodecConfig - デコード時の制限と null の扱い
//!
//! # 学習ポイント
//! - Builder パターン（`CodecConfig::builder()`）
//! - `#[serde(default)]` によるホスト側設定ファイルからの読み込み

use serde::{Deserialize, Serialize};

/// Decode-side limits and leniency.
///
/// The default accepts any size, any batch length, and treats an explicit
/// `null` optional field as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Inputs longer than this many bytes are rejected before parsing.
    pub max_payload_bytes: Option<usize>,

    /// Maximum number of envelopes accepted in one batch.
    pub max_batch_len: Option<usize>,

    /// When `false`, `"operationName": null` and `"variables": null` are
    /// type mismatches instead of absent fields.
    pub null_as_absent: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: None,
            max_batch_len: None,
            null_as_absent: true,
        }
    }
}

impl CodecConfig {
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }
}

/// CodecConfigBuilder は CodecConfig を組み立てる
///
/// # 使用例
/// ```
/// use gql_envelope::CodecConfig;
///
/// let config = CodecConfig::builder()
///     .max_payload_bytes(64 * 1024)
///     .max_batch_len(10)
///     .build();
/// assert_eq!(config.max_batch_len, Some(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_payload_bytes(mut self, limit: usize) -> Self {
        self.config.max_payload_bytes = Some(limit);
        self
    }

    pub fn max_batch_len(mut self, limit: usize) -> Self {
        self.config.max_batch_len = Some(limit);
        self
    }

    pub fn null_as_absent(mut self, enabled: bool) -> Self {
        self.config.null_as_absent = enabled;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}

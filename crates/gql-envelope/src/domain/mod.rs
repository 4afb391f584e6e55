//! Domain model: the request envelope and its parts.
//!
//! - envelope: `GraphQlRequest`（query / operationName / variables）
//! - variables: `Variables`（挿入順を保持する名前付き引数）
//! - payload: `RequestPayload`（単体 or バッチ）

pub mod envelope;
pub mod payload;
pub mod variables;

pub use self::envelope::GraphQlRequest;
pub use self::payload::RequestPayload;
pub use self::variables::Variables;

//! gql-envelope
//!
//! Wire shape of a GraphQL-over-HTTP request envelope and a JSON codec for it.
//! The query document is carried as an opaque string; parsing, validation and
//! execution belong to other layers.
//!
//! # モジュール構成
//! - **domain**: `GraphQlRequest`, `Variables`, `RequestPayload`
//! - **codec**: `RequestCodec`（encode / decode）、`CodecConfig`、`CodecError`
//! - **observability**: tracing subscriber の初期化
//!
//! ```
//! use gql_envelope::{GraphQlRequest, decode, encode};
//!
//! let request = GraphQlRequest::new("{ foo }");
//! let text = encode(&request).unwrap();
//! assert_eq!(text, r#"{"query":"{ foo }"}"#);
//! assert_eq!(decode(&text).unwrap(), request);
//! ```

pub mod codec;
pub mod domain;
pub mod observability;

pub use codec::{CodecConfig, CodecError, ErrorKind, RequestCodec, decode, encode};
pub use domain::{GraphQlRequest, RequestPayload, Variables};

//! RequestPayload: one envelope or a batch of them in a single body.

use serde::Serialize;

use super::envelope::GraphQlRequest;

/// HTTP bodies carry either a single envelope object or a JSON array of
/// envelopes. Encodes untagged, so each variant keeps its plain wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    Single(GraphQlRequest),
    Batch(Vec<GraphQlRequest>),
}

impl RequestPayload {
    pub fn is_batch(&self) -> bool {
        matches!(self, RequestPayload::Batch(_))
    }

    pub fn len(&self) -> usize {
        match self {
            RequestPayload::Single(_) => 1,
            RequestPayload::Batch(requests) => requests.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into a list; a single envelope becomes a one-element list.
    pub fn into_requests(self) -> Vec<GraphQlRequest> {
        match self {
            RequestPayload::Single(request) => vec![request],
            RequestPayload::Batch(requests) => requests,
        }
    }
}

impl From<GraphQlRequest> for RequestPayload {
    fn from(request: GraphQlRequest) -> Self {
        RequestPayload::Single(request)
    }
}

impl From<Vec<GraphQlRequest>> for RequestPayload {
    fn from(requests: Vec<GraphQlRequest>) -> Self {
        RequestPayload::Batch(requests)
    }
}

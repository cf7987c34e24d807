//! Wire codec for request collections.
//!
//! The serializer/parser pair is a seam so hosts can swap the wire shape;
//! [`JsonCodec`] is the default on both sides and emits compact JSON, which
//! is also safe to carry in an HTTP header value.

use crate::request::RequestSet;

/// Encodes a request collection for transport.
pub trait RequestSerializer: Send + Sync {
    fn serialize(&self, requests: &RequestSet) -> anyhow::Result<String>;
}

/// Decodes a transported request collection.
pub trait RequestParser: Send + Sync {
    fn parse(&self, raw: &str) -> anyhow::Result<RequestSet>;
}

/// Default codec: compact JSON in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl RequestSerializer for JsonCodec {
    fn serialize(&self, requests: &RequestSet) -> anyhow::Result<String> {
        Ok(serde_json::to_string(requests)?)
    }
}

impl RequestParser for JsonCodec {
    fn parse(&self, raw: &str) -> anyhow::Result<RequestSet> {
        Ok(serde_json::from_str(raw)?)
    }
}

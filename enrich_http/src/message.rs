//! Adapter between request collections and wire-level messages.
//!
//! Messages are handled as values: mutators consume the message and return
//! the amended one. Abstracting over headers plus byte body lets the same
//! manager serve both requests and responses.

use std::sync::Arc;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Request, Response};
use serde_json::Value;

use enrich_core::{JsonCodec, RequestParser, RequestSerializer, RequestSet};

/// Minimal message surface the enrichment layer needs.
pub trait HttpMessage {
    fn headers(&self) -> &HeaderMap;
    fn headers_mut(&mut self) -> &mut HeaderMap;
    fn payload_bytes(&self) -> &[u8];
    fn set_payload_bytes(&mut self, bytes: Vec<u8>);
}

impl HttpMessage for Request<Vec<u8>> {
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        Request::headers_mut(self)
    }

    fn payload_bytes(&self) -> &[u8] {
        self.body()
    }

    fn set_payload_bytes(&mut self, bytes: Vec<u8>) {
        *self.body_mut() = bytes;
    }
}

impl HttpMessage for Response<Vec<u8>> {
    fn headers(&self) -> &HeaderMap {
        Response::headers(self)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        Response::headers_mut(self)
    }

    fn payload_bytes(&self) -> &[u8] {
        self.body()
    }

    fn set_payload_bytes(&mut self, bytes: Vec<u8>) {
        *self.body_mut() = bytes;
    }
}

/// Reads and writes enrichment plans and payloads on a message.
#[derive(Clone)]
pub struct MessageAdapter {
    serializer: Arc<dyn RequestSerializer>,
    parser: Arc<dyn RequestParser>,
}

impl MessageAdapter {
    #[must_use]
    pub fn new(serializer: Arc<dyn RequestSerializer>, parser: Arc<dyn RequestParser>) -> Self {
        Self { serializer, parser }
    }

    /// Adapter using [`JsonCodec`] in both directions.
    #[must_use]
    pub fn json() -> Self {
        Self::new(Arc::new(JsonCodec), Arc::new(JsonCodec))
    }

    /// Decode the plan carried in `header`. An absent header reads as an
    /// empty plan; a present but undecodable one is an error.
    pub fn get_requests<M: HttpMessage>(
        &self,
        message: &M,
        header: &HeaderName,
    ) -> anyhow::Result<RequestSet> {
        match message.headers().get(header) {
            None => Ok(RequestSet::new()),
            Some(value) => self.parser.parse(value.to_str()?),
        }
    }

    /// Encode `requests` into `header` on a copy of the message.
    pub fn set_requests<M: HttpMessage>(
        &self,
        mut message: M,
        header: &HeaderName,
        requests: &RequestSet,
    ) -> anyhow::Result<M> {
        let raw = self.serializer.serialize(requests)?;
        let value = HeaderValue::from_str(&raw)?;
        message.headers_mut().insert(header, value);
        Ok(message)
    }

    /// Read the message body as structured data. An empty body reads as
    /// `null`.
    pub fn get_payload<M: HttpMessage>(&self, message: &M) -> anyhow::Result<Value> {
        let body = message.payload_bytes();
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(body)?)
    }

    /// Replace the message body with `payload` on a copy of the message.
    pub fn set_payload<M: HttpMessage>(&self, mut message: M, payload: &Value) -> anyhow::Result<M> {
        message.set_payload_bytes(serde_json::to_vec(payload)?);
        Ok(message)
    }
}

impl Default for MessageAdapter {
    fn default() -> Self {
        Self::json()
    }
}

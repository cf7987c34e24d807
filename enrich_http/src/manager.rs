//! Manager bridging accumulated requests to wire-level messages.

use std::sync::Arc;

use http::header::HeaderName;
use tracing::debug;

use enrich_core::{Enricher, ItemSpec, RequestBuilder, RequestError, RequestLog};

use crate::header::ENRICHMENT_REQUEST_HEADER;
use crate::message::{HttpMessage, MessageAdapter};

/// Accumulates enrichment requests and carries them over a designated
/// message header, in both directions.
///
/// Producer side: queue requests, then stamp them onto an outgoing message
/// with [`HttpManager::set_requests`]. Consumer side:
/// [`HttpManager::enrich_message`] is driven purely by the header the remote
/// party sent and never consults the local accumulator, which is what makes
/// the request/response round trip work: the client asks for enrichment of a
/// response it has not received yet.
pub struct HttpManager {
    enricher: Arc<dyn Enricher>,
    adapter: MessageAdapter,
    log: RequestLog,
    requests_header: HeaderName,
}

impl HttpManager {
    #[must_use]
    pub fn new(enricher: Arc<dyn Enricher>, adapter: MessageAdapter) -> Self {
        Self {
            enricher,
            adapter,
            log: RequestLog::new(),
            requests_header: ENRICHMENT_REQUEST_HEADER,
        }
    }

    /// Carry the plan in `header` instead of the default
    /// [`ENRICHMENT_REQUEST_HEADER`].
    pub fn use_header(&mut self, header: HeaderName) -> &mut Self {
        self.requests_header = header;
        self
    }

    #[must_use]
    pub fn requests_header(&self) -> &HeaderName {
        &self.requests_header
    }

    /// Queue one enrichment request. See [`RequestLog::add_request`].
    pub fn add_request(
        &mut self,
        target: &str,
        field: Option<&str>,
        items: &[ItemSpec],
    ) -> Result<&mut RequestBuilder, RequestError> {
        self.log.add_request(target, field, items)
    }

    /// Drop every queued request.
    pub fn clean_requests(&mut self) -> &mut Self {
        self.log.clean();
        self
    }

    /// Number of queued requests.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.log.len()
    }

    /// Stamp the current plan into the configured header on a copy of the
    /// outgoing message. The queued requests are left in place.
    pub fn set_requests<M: HttpMessage>(&self, message: M) -> anyhow::Result<M> {
        let requests = self.log.snapshot();
        debug!(
            requests = requests.len(),
            header = %self.requests_header,
            "attaching enrichment plan to message"
        );
        self.adapter
            .set_requests(message, &self.requests_header, &requests)
    }

    /// Enrich an incoming message's payload according to the plan its header
    /// carries. An absent or empty plan passes the message through untouched
    /// without parsing the payload.
    pub fn enrich_message<M: HttpMessage>(&self, message: M) -> anyhow::Result<M> {
        let requests = self
            .adapter
            .get_requests(&message, &self.requests_header)?;

        if requests.is_empty() {
            debug!("no enrichment requested, passing message through");
            return Ok(message);
        }

        debug!(requests = requests.len(), "enriching message payload");
        let payload = self.adapter.get_payload(&message)?;
        let enriched = self.enricher.enrich(payload, &requests)?;
        self.adapter.set_payload(message, &enriched)
    }
}

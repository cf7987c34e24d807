//! Manager applying an accumulated plan to in-memory data.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::Enricher;
use crate::error::RequestError;
use crate::log::RequestLog;
use crate::request::{ItemSpec, RequestBuilder};

/// Accumulates enrichment requests and applies them to in-memory data by
/// delegating to the injected engine.
///
/// The accumulator is the only mutable state and is never reset implicitly;
/// callers clear it with [`ArrayManager::clean_requests`] between usage
/// cycles. A shared instance used across concurrent units of work must be
/// externally serialized.
pub struct ArrayManager {
    enricher: Arc<dyn Enricher>,
    log: RequestLog,
}

impl ArrayManager {
    #[must_use]
    pub fn new(enricher: Arc<dyn Enricher>) -> Self {
        Self {
            enricher,
            log: RequestLog::new(),
        }
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

    /// Apply the current plan to `data` and return the engine's result
    /// unchanged. The queued requests are left in place.
    pub fn enrich_data(&self, data: Value) -> anyhow::Result<Value> {
        let requests = self.log.snapshot();
        debug!(requests = requests.len(), "dispatching data enrichment");
        self.enricher.enrich(data, &requests)
    }
}

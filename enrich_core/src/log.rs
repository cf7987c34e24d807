//! Accumulation of pending enrichment requests.
//!
//! Both managers embed a [`RequestLog`]: an ordered list of in-progress
//! builders scoped to the manager's lifetime. The log is only ever cleared
//! explicitly; taking a snapshot never resets it.

use tracing::debug;

use crate::error::RequestError;
use crate::request::{DEFAULT_LOOKUP_FIELD, ItemSpec, RequestBuilder, RequestSet};

/// Ordered accumulator of request builders.
#[derive(Debug, Default)]
pub struct RequestLog {
    builders: Vec<RequestBuilder>,
}

impl RequestLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one request against `target`, looked up by `field` (defaults to
    /// [`DEFAULT_LOOKUP_FIELD`] when `None`), carrying `items` in order.
    ///
    /// Every item is validated before anything is appended, so a malformed
    /// item leaves the log exactly as it was. The appended builder is
    /// returned for further fluent mutation before dispatch.
    pub fn add_request(
        &mut self,
        target: &str,
        field: Option<&str>,
        items: &[ItemSpec],
    ) -> Result<&mut RequestBuilder, RequestError> {
        let field = field.unwrap_or(DEFAULT_LOOKUP_FIELD);

        let mut resolved = Vec::with_capacity(items.len());
        for spec in items {
            resolved.push(spec.to_item()?);
        }

        let mut builder = RequestBuilder::new(target)?;
        builder.field(field);
        for item in resolved {
            builder.push_item(item);
        }

        debug!(
            request_target = target,
            lookup_field = field,
            items = builder.items().len(),
            "queued enrichment request"
        );

        let index = self.builders.len();
        self.builders.push(builder);
        Ok(&mut self.builders[index])
    }

    /// Drop every queued builder.
    pub fn clean(&mut self) -> &mut Self {
        debug!(dropped = self.builders.len(), "cleaned enrichment requests");
        self.builders.clear();
        self
    }

    /// Freeze every queued builder, in accumulation order, into a
    /// point-in-time plan. The log itself is left untouched.
    #[must_use]
    pub fn snapshot(&self) -> RequestSet {
        self.builders.iter().map(RequestBuilder::build).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

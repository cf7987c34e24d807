#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

pub mod codec;
pub mod error;
pub mod log;
pub mod manager;
pub mod request;

pub use codec::{JsonCodec, RequestParser, RequestSerializer};
pub use error::RequestError;
pub use log::RequestLog;
pub use manager::ArrayManager;
pub use request::{DEFAULT_LOOKUP_FIELD, Item, ItemSpec, Request, RequestBuilder, RequestSet};

/// External enrichment engine.
///
/// Given structured data and an ordered request collection, returns the data
/// augmented per each request's target, lookup field and items. Failure modes
/// (unknown target, lookup miss) belong to the implementation; this layer
/// passes them through untouched.
pub trait Enricher: Send + Sync {
    fn enrich(&self, data: Value, requests: &RequestSet) -> anyhow::Result<Value>;
}

/// External data source resolving one lookup key to an enrichment value.
pub trait Repository: Send + Sync {
    fn find(&self, key: &Value) -> anyhow::Result<Option<Value>>;
}

/// Registry mapping a target name to the repository serving it.
///
/// Populated at assembly time from configuration and handed to the enrichment
/// engine; the accumulation layer never consults it directly.
#[derive(Default, Clone)]
pub struct Repositories {
    map: HashMap<String, Arc<dyn Repository>>,
}

impl Repositories {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repository under a target name, replacing any previous one.
    pub fn set(&mut self, target: impl Into<String>, repository: Arc<dyn Repository>) -> &mut Self {
        self.map.insert(target.into(), repository);
        self
    }

    #[must_use]
    pub fn get(&self, target: &str) -> Option<&Arc<dyn Repository>> {
        self.map.get(target)
    }

    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.map.contains_key(target)
    }

    /// Registered target names, in no particular order.
    #[must_use]
    pub fn targets(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for Repositories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repositories")
            .field("targets", &self.targets())
            .finish()
    }
}

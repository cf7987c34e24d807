//! Manual object-graph assembly for the enrichment managers.
//!
//! Hosts inject the external engine and their repositories here, pick codecs
//! and the plan header, and get fully wired managers back. Nothing is
//! resolved lazily; a missing mandatory component fails at build time.

use std::sync::Arc;

use http::header::HeaderName;
use thiserror::Error;
use tracing::info;

use enrich_core::{
    ArrayManager, Enricher, JsonCodec, Repositories, Repository, RequestParser, RequestSerializer,
};
use enrich_http::{ENRICHMENT_REQUEST_HEADER, HttpManager, MessageAdapter};

use crate::schema::{CodecKind, Settings};

/// Errors raised while assembling the enrichment layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The external enrichment engine is the one component without a
    /// default; managers cannot be built without it.
    #[error("no enrichment engine was supplied")]
    MissingEnricher,

    #[error("\"{0}\" is not a valid header name")]
    InvalidHeader(String),
}

/// Collects component choices and builds managers.
pub struct EnrichmentBuilder {
    serializer: Option<Arc<dyn RequestSerializer>>,
    parser: Option<Arc<dyn RequestParser>>,
    enricher: Option<Arc<dyn Enricher>>,
    repositories: Repositories,
    header: HeaderName,
}

impl Default for EnrichmentBuilder {
    fn default() -> Self {
        Self {
            serializer: None,
            parser: None,
            enricher: None,
            repositories: Repositories::new(),
            header: ENRICHMENT_REQUEST_HEADER,
        }
    }
}

impl EnrichmentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from file-loaded [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let header: HeaderName = settings
            .header
            .parse()
            .map_err(|_| ConfigError::InvalidHeader(settings.header.clone()))?;

        let mut builder = Self::new().header(header);
        match settings.codec {
            CodecKind::Json => {
                builder = builder.with_serializer(JsonCodec).with_parser(JsonCodec);
            }
        }
        Ok(builder)
    }

    /// Override the plan serializer (default: [`JsonCodec`]).
    #[must_use]
    pub fn with_serializer<S>(mut self, serializer: S) -> Self
    where
        S: RequestSerializer + 'static,
    {
        self.serializer = Some(Arc::new(serializer));
        self
    }

    /// Override the plan parser (default: [`JsonCodec`]).
    #[must_use]
    pub fn with_parser<P>(mut self, parser: P) -> Self
    where
        P: RequestParser + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Supply the external enrichment engine. Mandatory.
    #[must_use]
    pub fn with_enricher<E>(mut self, enricher: E) -> Self
    where
        E: Enricher + 'static,
    {
        self.enricher = Some(Arc::new(enricher));
        self
    }

    /// Register a repository under its target name.
    #[must_use]
    pub fn repository<R>(mut self, target: impl Into<String>, repository: R) -> Self
    where
        R: Repository + 'static,
    {
        self.repositories.set(target, Arc::new(repository));
        self
    }

    /// Carry the plan in `header` instead of the default.
    #[must_use]
    pub fn header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    /// The assembled target registry, for handing to the engine.
    #[must_use]
    pub fn repositories(&self) -> &Repositories {
        &self.repositories
    }

    /// Build the in-memory manager.
    pub fn build_array_manager(&self) -> Result<ArrayManager, ConfigError> {
        let enricher = self.enricher.clone().ok_or(ConfigError::MissingEnricher)?;
        info!(
            repositories = self.repositories.len(),
            "assembled array enrichment manager"
        );
        Ok(ArrayManager::new(enricher))
    }

    /// Build the HTTP manager with the configured codec pair and header.
    pub fn build_http_manager(&self) -> Result<HttpManager, ConfigError> {
        let enricher = self.enricher.clone().ok_or(ConfigError::MissingEnricher)?;
        let serializer = self
            .serializer
            .clone()
            .unwrap_or_else(|| Arc::new(JsonCodec));
        let parser = self.parser.clone().unwrap_or_else(|| Arc::new(JsonCodec));

        let mut manager = HttpManager::new(enricher, MessageAdapter::new(serializer, parser));
        manager.use_header(self.header.clone());
        info!(
            repositories = self.repositories.len(),
            header = %self.header,
            "assembled http enrichment manager"
        );
        Ok(manager)
    }
}

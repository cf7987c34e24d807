use thiserror::Error;

/// Errors raised while accumulating enrichment requests.
///
/// Failures from the external engine or message adapter are not represented
/// here; those propagate as-is from the call that produced them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("request item must carry both \"key\" and \"alias\" (missing {0})")]
    MalformedItem(&'static str),

    #[error("request target must be a non-empty identifier")]
    EmptyTarget,
}

//! Well-known header carrying a serialized enrichment plan.

use http::header::HeaderName;

/// Default header for the serialized request collection. Managers can be
/// pointed at a different header per instance via
/// [`crate::HttpManager::use_header`].
pub const ENRICHMENT_REQUEST_HEADER: HeaderName =
    HeaderName::from_static("x-enrichment-request");

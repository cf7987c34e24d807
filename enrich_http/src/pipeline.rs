//! Explicit pipeline stage for outbound messages.

use crate::manager::HttpManager;
use crate::message::HttpMessage;

/// Pin the manager's accumulated plan onto a produced response.
///
/// Meant to run as the last stage of a response pipeline: the handler builds
/// the response, this stage stamps the plan header onto it, and the peer (or
/// a later hop) enriches the payload via
/// [`HttpManager::enrich_message`].
pub fn pin_requests<M: HttpMessage>(manager: &HttpManager, response: M) -> anyhow::Result<M> {
    manager.set_requests(response)
}

//! Name-change service errors.

use serde_json::Value;
use thiserror::Error;

use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum NameChangeError {
    /// The upstream platform declined the change.
    #[error("upstream rejected the name change")]
    Rejected {
        /// Reason reported by the upstream, when it provided one.
        message: Option<String>,

        /// Full upstream response body.
        payload: Value,
    },

    /// The outbound call failed before a decodable reply was received.
    #[error("upstream request failed")]
    Upstream(#[from] UpstreamError),
}

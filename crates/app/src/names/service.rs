//! Name-change service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    names::{NameChangeError, NameChanged, SessionCredential},
    upstream::{ProfileUpdateReply, UpstreamClient},
};

/// Name-change service backed by the upstream profile endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamNameChangeService {
    upstream: UpstreamClient,
}

impl UpstreamNameChangeService {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Interpret a decoded upstream reply.
    ///
    /// Anything that fails the acceptance test is a rejection; the upstream
    /// body travels with the outcome either way.
    fn outcome(reply: ProfileUpdateReply) -> Result<NameChanged, NameChangeError> {
        if reply.is_accepted() {
            return Ok(NameChanged {
                payload: reply.body,
            });
        }

        Err(NameChangeError::Rejected {
            message: reply.status_msg().map(str::to_owned),
            payload: reply.body,
        })
    }
}

#[async_trait]
impl NameChangeService for UpstreamNameChangeService {
    async fn change_display_name(
        &self,
        session: &SessionCredential,
        name: &str,
    ) -> Result<NameChanged, NameChangeError> {
        let reply = self.upstream.update_profile(session, name).await?;

        Self::outcome(reply)
    }
}

#[automock]
#[async_trait]
pub trait NameChangeService: Send + Sync {
    async fn change_display_name(
        &self,
        session: &SessionCredential,
        name: &str,
    ) -> Result<NameChanged, NameChangeError>;
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;

    fn reply(http_status: StatusCode, body: serde_json::Value) -> ProfileUpdateReply {
        ProfileUpdateReply { http_status, body }
    }

    #[test]
    fn accepted_reply_carries_the_upstream_body() {
        let body = json!({ "status_code": 0, "extra": "kept" });

        let changed = UpstreamNameChangeService::outcome(reply(StatusCode::OK, body.clone()))
            .expect("zero status code on a 200 reply is a success");

        assert_eq!(changed.payload, body);
    }

    #[test]
    fn nonzero_status_code_is_a_rejection_with_the_upstream_message() {
        let body = json!({ "status_code": 8, "status_msg": "Invalid session" });

        let error = UpstreamNameChangeService::outcome(reply(StatusCode::OK, body.clone()))
            .expect_err("nonzero status code must be rejected");

        match error {
            NameChangeError::Rejected { message, payload } => {
                assert_eq!(message.as_deref(), Some("Invalid session"));
                assert_eq!(payload, body);
            }
            NameChangeError::Upstream(_) => panic!("expected a rejection"),
        }
    }

    #[test]
    fn rejection_without_status_msg_has_no_message() {
        let body = json!({ "status_code": 3 });

        let error = UpstreamNameChangeService::outcome(reply(StatusCode::OK, body))
            .expect_err("nonzero status code must be rejected");

        match error {
            NameChangeError::Rejected { message, .. } => assert_eq!(message, None),
            NameChangeError::Upstream(_) => panic!("expected a rejection"),
        }
    }

    #[test]
    fn http_failure_is_a_rejection_even_with_a_zero_status_code() {
        let body = json!({ "status_code": 0 });

        let error = UpstreamNameChangeService::outcome(reply(StatusCode::FORBIDDEN, body))
            .expect_err("non-2xx replies are never accepted");

        assert!(matches!(error, NameChangeError::Rejected { .. }));
    }
}

//! Error taxonomy for the tutoring core.

/// Failures the orchestrator can surface. Both are recovered at the
/// session boundary into a user-visible assistant turn; `detail` is for
/// diagnostics only and never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// The completion-service call itself failed (network, auth, quota).
    /// Failure subtypes are not interpreted.
    #[error("completion service unavailable: {detail}")]
    ServiceUnavailable { detail: String },

    /// The service returned text, but it matched zero structured blocks.
    #[error("response matched no structured blocks")]
    UnparseableResponse,
}

impl TutorError {
    pub fn service_unavailable(err: anyhow::Error) -> Self {
        Self::ServiceUnavailable {
            detail: format!("{err:#}"),
        }
    }
}

//! Completion-service collaborators.
//!
//! The tutoring core talks to a single external capability: a text/vision
//! completion service. It is consumed through [`CompletionService`] so the
//! orchestrator can be driven by a test double instead of a live backend.

pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;
use shared::{ChatMessage, ImageFile};

pub use gemini::GeminiClient;

/// The external text/vision generation capability.
///
/// All three operations may fail (network/auth/quota); callers handle
/// failure as a single signal and do not interpret subtypes.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Image-capable single-turn completion.
    async fn complete_vision(
        &self,
        image: &ImageFile,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String>;

    /// Text-only single-turn completion.
    async fn complete_text(&self, prompt: &str, system_instruction: &str) -> Result<String>;

    /// Multi-turn session completion. `history` carries prior turns as
    /// (role, text) pairs with roles "user" | "model"; `new_message` is
    /// appended as the newest user turn.
    async fn complete_chat(
        &self,
        history: &[ChatMessage],
        system_instruction: &str,
        new_message: &str,
    ) -> Result<String>;
}

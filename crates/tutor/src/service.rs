//! Orchestrates the three remote operations against the completion service.

use std::sync::Arc;

use providers::CompletionService;
use shared::{ChatMessage, ImageAnalysis, ImageFile, Sender, Turn, TutorError};

use crate::parser::parse_vision_reply;
use crate::prompts;

/// Owns the operation-specific instructions and payload assembly. Stateless
/// between calls; single attempt per call, no retry. The collaborator is
/// injected so tests can substitute a double.
pub struct TutorService {
    completion: Arc<dyn CompletionService>,
}

impl TutorService {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Identify objects in `image` and extract (term, translation, example)
    /// triples from the reply. A non-empty parse is the sole success
    /// criterion.
    pub async fn analyze_image(
        &self,
        image: &ImageFile,
        user_prompt: Option<&str>,
    ) -> Result<ImageAnalysis, TutorError> {
        let prompt = user_prompt.unwrap_or(prompts::DEFAULT_VISION_PROMPT);
        let reply = self
            .completion
            .complete_vision(image, prompt, prompts::VISION_SYSTEM_INSTRUCTION)
            .await
            .map_err(TutorError::service_unavailable)?;

        let identified_objects = parse_vision_reply(&reply)?;
        Ok(ImageAnalysis {
            image_prompt: user_prompt
                .unwrap_or(prompts::DEFAULT_IMAGE_PROMPT_LABEL)
                .to_string(),
            identified_objects,
        })
    }

    /// Check `sentence` for grammar mistakes. The reply is returned verbatim
    /// and never parsed further.
    pub async fn check_grammar(&self, sentence: &str) -> Result<String, TutorError> {
        let prompt = format!("User sentence: '{sentence}'");
        let reply = self
            .completion
            .complete_text(&prompt, prompts::GRAMMAR_SYSTEM_INSTRUCTION)
            .await
            .map_err(TutorError::service_unavailable)?;

        if reply.is_empty() {
            return Ok(prompts::GRAMMAR_EMPTY_FALLBACK.to_string());
        }
        Ok(reply)
    }

    /// General tutoring chat. Replays only plain-text and grammar-correction
    /// turns as prior context; image-analysis turns are not representable as
    /// dialogue in this contract.
    pub async fn chat(&self, history: &[Turn], new_message: &str) -> Result<String, TutorError> {
        let prior: Vec<ChatMessage> = history
            .iter()
            .filter_map(|turn| {
                turn.as_text().map(|text| {
                    let role = match turn.sender {
                        Sender::User => "user",
                        Sender::Soulingo => "model",
                    };
                    ChatMessage::new(role, text)
                })
            })
            .collect();

        let reply = self
            .completion
            .complete_chat(&prior, prompts::CHAT_SYSTEM_INSTRUCTION, new_message)
            .await
            .map_err(TutorError::service_unavailable)?;

        if reply.is_empty() {
            return Ok(prompts::CHAT_EMPTY_FALLBACK.to_string());
        }
        Ok(reply)
    }
}

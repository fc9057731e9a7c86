//! Conversation types shared across the workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Soulingo,
}

/// One vocabulary item extracted from a vision reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedTerm {
    pub english: String,
    pub turkish: String,
    pub sentence: String,
}

/// The parsed outcome of an image analysis: the prompt that was sent
/// plus the terms the model identified, in reply order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub image_prompt: String,
    pub identified_objects: Vec<IdentifiedTerm>,
}

/// Raw image payload handed to the vision operation. Base64 encoding
/// happens at request-build time inside the provider.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

/// Turn payload. One variant per content kind, so kind and payload
/// cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnContent {
    Text { text: String },
    GrammarCorrection { text: String },
    ImageAnalysis(ImageAnalysis),
}

/// Content kind, for render surfaces that switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Text,
    GrammarCorrection,
    ImageAnalysis,
}

/// One message unit in the conversation. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub content: TurnContent,
}

impl Turn {
    pub fn new(sender: Sender, content: TurnContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            timestamp: Utc::now(),
            content,
        }
    }

    /// Plain-text assistant turn (also used for user-visible error messages).
    pub fn text(sender: Sender, text: impl Into<String>) -> Self {
        Self::new(sender, TurnContent::Text { text: text.into() })
    }

    pub fn kind(&self) -> TurnKind {
        match self.content {
            TurnContent::Text { .. } => TurnKind::Text,
            TurnContent::GrammarCorrection { .. } => TurnKind::GrammarCorrection,
            TurnContent::ImageAnalysis(_) => TurnKind::ImageAnalysis,
        }
    }

    /// The turn's text, for the kinds that carry one.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            TurnContent::Text { text } | TurnContent::GrammarCorrection { text } => Some(text),
            TurnContent::ImageAnalysis(_) => None,
        }
    }
}

/// A (role, text) pair for multi-turn completion requests.
/// Roles follow the provider convention: "user" | "model" | "system".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

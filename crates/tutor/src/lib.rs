//! Soulingo tutoring core.
//!
//! Routes user input (text or image) to the completion service, parses the
//! model's block-formatted replies into typed terms, and maintains the
//! conversation transcript:
//! - classify text as a grammar-check or general-chat request
//! - extract (term, translation, example) triples from vision replies
//! - orchestrate the three remote operations with typed failure signals
//! - drive the per-turn Idle/Pending lifecycle

pub mod classifier;
pub mod parser;
pub mod prompts;
pub mod service;
pub mod session;

pub use classifier::{classify, TextMode};
pub use parser::parse_vision_reply;
pub use service::TutorService;
pub use session::ChatSession;

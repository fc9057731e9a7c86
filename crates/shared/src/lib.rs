pub mod chat;
pub mod error;
pub mod settings;

pub use chat::{ChatMessage, IdentifiedTerm, ImageAnalysis, ImageFile, Sender, Turn, TurnContent, TurnKind};
pub use error::TutorError;
pub use settings::{AppSettings, GeminiSettings, ProviderAuth};

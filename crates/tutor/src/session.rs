//! Per-turn conversation lifecycle.
//!
//! `Idle -> Pending -> Idle`, with the pending flag as the sole guard:
//! while a call is in flight, new submissions are no-ops, so at most one
//! collaborator call is outstanding and turns are appended in call order.

use shared::{ImageFile, Sender, Turn, TurnContent};

use crate::classifier::{classify, TextMode};
use crate::prompts;
use crate::service::TutorService;

pub struct ChatSession {
    tutor: TutorService,
    turns: Vec<Turn>,
    pending: bool,
}

impl ChatSession {
    /// Starts Idle, seeded with the fixed introduction turn.
    pub fn new(tutor: TutorService) -> Self {
        Self {
            tutor,
            turns: vec![Turn::text(Sender::Soulingo, prompts::INTRODUCTION)],
            pending: false,
        }
    }

    /// The transcript, in causal order. Read-only; only the submit paths
    /// append.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Route a text submission to grammar check or chat. Ignored while a
    /// request is pending or when `text` trims to empty. Completes back to
    /// Idle on both success and failure, appending exactly one assistant
    /// turn.
    pub async fn submit_text(&mut self, text: &str) {
        if self.pending || text.trim().is_empty() {
            return;
        }

        // Chat replays the transcript as it was before this submission.
        let history = self.turns.clone();
        self.turns.push(Turn::text(Sender::User, text));
        self.pending = true;

        let reply_turn = match classify(text) {
            TextMode::GrammarCheck => match self.tutor.check_grammar(text).await {
                Ok(reply) => Turn::new(
                    Sender::Soulingo,
                    TurnContent::GrammarCorrection { text: reply },
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "grammar check failed");
                    Turn::text(Sender::Soulingo, prompts::GRAMMAR_ERROR_MESSAGE)
                }
            },
            TextMode::GeneralChat => match self.tutor.chat(&history, text).await {
                Ok(reply) => Turn::text(Sender::Soulingo, reply),
                Err(err) => {
                    tracing::warn!(error = %err, "chat failed");
                    Turn::text(Sender::Soulingo, prompts::CHAT_ERROR_MESSAGE)
                }
            },
        };

        self.turns.push(reply_turn);
        self.pending = false;
    }

    /// Analyze an uploaded image. Ignored while a request is pending.
    /// Completes back to Idle on both success and failure, appending
    /// exactly one assistant turn.
    pub async fn submit_image(&mut self, image: ImageFile, prompt: Option<String>) {
        if self.pending {
            return;
        }
        self.pending = true;

        let reply_turn = match self.tutor.analyze_image(&image, prompt.as_deref()).await {
            Ok(analysis) => Turn::new(Sender::Soulingo, TurnContent::ImageAnalysis(analysis)),
            Err(err) => {
                tracing::warn!(error = %err, file = %image.file_name, "image analysis failed");
                Turn::text(Sender::Soulingo, prompts::VISION_ERROR_MESSAGE)
            }
        };

        self.turns.push(reply_turn);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use providers::CompletionService;
    use shared::{ChatMessage, TurnKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Returns the same scripted result for every operation and counts calls.
    struct StaticCompletion {
        reply: Mutex<Result<String>>,
        calls: AtomicUsize,
    }

    impl StaticCompletion {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Ok(reply.to_string())),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Err(anyhow!("network down"))),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn scripted(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &*self.reply.lock().unwrap() {
                Ok(text) => Ok(text.clone()),
                Err(err) => Err(anyhow!("{err}")),
            }
        }
    }

    #[async_trait]
    impl CompletionService for StaticCompletion {
        async fn complete_vision(
            &self,
            _image: &ImageFile,
            _prompt: &str,
            _system_instruction: &str,
        ) -> Result<String> {
            self.scripted()
        }

        async fn complete_text(&self, _prompt: &str, _system_instruction: &str) -> Result<String> {
            self.scripted()
        }

        async fn complete_chat(
            &self,
            _history: &[ChatMessage],
            _system_instruction: &str,
            _new_message: &str,
        ) -> Result<String> {
            self.scripted()
        }
    }

    fn session_with(completion: Arc<StaticCompletion>) -> ChatSession {
        ChatSession::new(TutorService::new(completion))
    }

    fn sample_image() -> ImageFile {
        ImageFile {
            bytes: vec![9, 9, 9],
            mime_type: "image/jpeg".into(),
            file_name: "desk.jpg".into(),
        }
    }

    #[test]
    fn starts_idle_with_introduction_turn() {
        let session = session_with(StaticCompletion::ok("x"));
        assert!(!session.is_pending());
        assert_eq!(session.turns().len(), 1);
        let intro = &session.turns()[0];
        assert_eq!(intro.sender, Sender::Soulingo);
        assert_eq!(intro.as_text(), Some(prompts::INTRODUCTION));
    }

    #[tokio::test]
    async fn english_text_appends_grammar_correction_turn() {
        let fake = StaticCompletion::ok("Küçük bir düzeltme: 'went' demeliyiz.");
        let mut session = session_with(fake.clone());

        session.submit_text("I go to school yesterday.").await;

        assert!(!session.is_pending());
        assert_eq!(session.turns().len(), 3);
        assert_eq!(session.turns()[1].sender, Sender::User);
        assert_eq!(session.turns()[1].kind(), TurnKind::Text);
        assert_eq!(session.turns()[2].sender, Sender::Soulingo);
        assert_eq!(session.turns()[2].kind(), TurnKind::GrammarCorrection);
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn non_english_text_appends_plain_chat_turn() {
        let fake = StaticCompletion::ok("Tabii, birlikte çalışalım!");
        let mut session = session_with(fake.clone());

        session.submit_text("Merhaba, nasılsın?").await;

        assert_eq!(session.turns().len(), 3);
        assert_eq!(session.turns()[2].kind(), TurnKind::Text);
        assert_eq!(
            session.turns()[2].as_text(),
            Some("Tabii, birlikte çalışalım!")
        );
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn blank_text_is_ignored() {
        let fake = StaticCompletion::ok("x");
        let mut session = session_with(fake.clone());

        session.submit_text("   ").await;
        session.submit_text("").await;

        assert_eq!(session.turns().len(), 1);
        assert_eq!(fake.call_count(), 0);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn submissions_while_pending_are_no_ops() {
        let fake = StaticCompletion::ok("x");
        let mut session = session_with(fake.clone());
        session.pending = true;

        session.submit_text("I should be ignored entirely.").await;
        session.submit_image(sample_image(), None).await;

        assert_eq!(session.turns().len(), 1);
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn text_failure_appends_error_turn_and_returns_to_idle() {
        let fake = StaticCompletion::failing();
        let mut session = session_with(fake.clone());

        session.submit_text("I go to school yesterday.").await;

        assert!(!session.is_pending());
        assert_eq!(session.turns().len(), 3);
        let error_turn = &session.turns()[2];
        assert_eq!(error_turn.kind(), TurnKind::Text);
        assert_eq!(error_turn.as_text(), Some(prompts::GRAMMAR_ERROR_MESSAGE));

        // The session is usable again after a failure.
        session.submit_text("Merhaba").await;
        assert_eq!(session.turns().len(), 5);
        assert_eq!(
            session.turns()[4].as_text(),
            Some(prompts::CHAT_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn image_success_appends_image_analysis_turn() {
        let fake = StaticCompletion::ok(
            "Merhaba!\n\n**Coffee Mug** (Türkçesi: Kahve Kupası)\nExample: 'I love my mug.'\n",
        );
        let mut session = session_with(fake);

        session.submit_image(sample_image(), None).await;

        assert!(!session.is_pending());
        assert_eq!(session.turns().len(), 2);
        let turn = &session.turns()[1];
        assert_eq!(turn.kind(), TurnKind::ImageAnalysis);
        match &turn.content {
            TurnContent::ImageAnalysis(analysis) => {
                assert_eq!(analysis.image_prompt, "Resim analizi");
                assert_eq!(analysis.identified_objects[0].turkish, "Kahve Kupası");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_vision_reply_appends_fixed_error_turn() {
        let fake = StaticCompletion::ok("Nothing recognizable.");
        let mut session = session_with(fake);

        session.submit_image(sample_image(), None).await;

        assert!(!session.is_pending());
        let turn = &session.turns()[1];
        assert_eq!(turn.kind(), TurnKind::Text);
        assert_eq!(turn.as_text(), Some(prompts::VISION_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn every_completed_submission_appends_exactly_one_assistant_turn() {
        let fake = StaticCompletion::ok("Merhaba!");
        let mut session = session_with(fake);

        session.submit_text("Nasıl gidiyor?").await;
        session.submit_text("Çok iyi!").await;

        let assistant_turns = session
            .turns()
            .iter()
            .filter(|t| t.sender == Sender::Soulingo)
            .count();
        // Introduction plus one reply per submission.
        assert_eq!(assistant_turns, 3);
        assert_eq!(session.turns().len(), 5);
    }
}

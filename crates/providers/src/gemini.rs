use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::settings::GeminiSettings;
use shared::{ChatMessage, ImageFile};
use std::env;
use std::time::Duration;

use crate::CompletionService;

#[derive(Debug, Serialize)]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

impl GeminiPart {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_image(image: &ImageFile) -> Self {
        Self {
            text: None,
            inline_data: Some(GeminiInlineData {
                mime_type: image.mime_type.clone(),
                data: base64::engine::general_purpose::STANDARD.encode(&image.bytes),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

/// REST client for the Gemini `generateContent` endpoint. Holds both the
/// text and vision model names; the operation picks which one to hit.
pub struct GeminiClient {
    http: Client,
    auth_token: String,
    text_model: String,
    vision_model: String,
}

impl GeminiClient {
    pub fn new(settings: &GeminiSettings) -> Result<Self> {
        let auth_token = if let Some(api_key) = &settings.auth.api_key {
            api_key.clone()
        } else {
            env::var("GEMINI_API_KEY").map_err(|_| anyhow!("No Gemini authentication configured"))?
        };

        Ok(Self {
            http: Client::builder().timeout(Duration::from_secs(45)).build()?,
            auth_token,
            text_model: settings.text_model.clone(),
            vision_model: settings.vision_model.clone(),
        })
    }

    async fn generate(
        &self,
        model: &str,
        contents: Vec<GeminiContent>,
        system_instruction: &str,
    ) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            model, self.auth_token
        );
        let req = GeminiRequest {
            contents,
            system_instruction: Some(GeminiContent {
                role: "system".to_string(),
                parts: vec![GeminiPart::text(system_instruction)],
            }),
        };
        let resp = self.http.post(url).json(&req).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let body = body.trim();
            if body.is_empty() {
                return Err(anyhow!("gemini error: {}", status));
            }
            let body = if body.len() > 800 {
                format!("{}...", &body[..800])
            } else {
                body.to_string()
            };
            return Err(anyhow!("gemini error: {}\n{}", status, body));
        }
        let body: GeminiResponse = resp.json().await?;
        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default();
        Ok(text)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete_vision(
        &self,
        image: &ImageFile,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String> {
        tracing::debug!(model = %self.vision_model, file = %image.file_name, "vision request");
        let contents = vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart::inline_image(image), GeminiPart::text(prompt)],
        }];
        self.generate(&self.vision_model, contents, system_instruction)
            .await
    }

    async fn complete_text(&self, prompt: &str, system_instruction: &str) -> Result<String> {
        tracing::debug!(model = %self.text_model, "text request");
        let contents = vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart::text(prompt)],
        }];
        self.generate(&self.text_model, contents, system_instruction)
            .await
    }

    async fn complete_chat(
        &self,
        history: &[ChatMessage],
        system_instruction: &str,
        new_message: &str,
    ) -> Result<String> {
        tracing::debug!(model = %self.text_model, turns = history.len(), "chat request");
        let mut contents: Vec<GeminiContent> = Vec::with_capacity(history.len() + 1);
        for m in history {
            // Gemini expects roles: "user" | "model".
            let role = match m.role.as_str() {
                "assistant" => "model",
                other => other,
            };
            contents.push(GeminiContent {
                role: role.to_string(),
                parts: vec![GeminiPart::text(m.content.clone())],
            });
        }
        contents.push(GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart::text(new_message)],
        });
        self.generate(&self.text_model, contents, system_instruction)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_part_serializes_without_inline_data() {
        let part = GeminiPart::text("hello");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn inline_image_part_carries_base64_payload() {
        let image = ImageFile {
            bytes: vec![0xde, 0xad, 0xbe, 0xef],
            mime_type: "image/png".into(),
            file_name: "desk.png".into(),
        };
        let part = GeminiPart::inline_image(&image);
        let data = part.inline_data.unwrap();
        assert_eq!(data.mime_type, "image/png");
        assert_eq!(data.data, "3q2+7w==");
    }

    #[test]
    fn response_parsing_tolerates_missing_candidates() {
        let body: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(body.candidates.is_empty());
    }
}

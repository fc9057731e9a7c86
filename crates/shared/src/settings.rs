//! Application settings, persisted as JSON by the front-end.

use serde::{Deserialize, Serialize};

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_vision_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderAuth {
    /// API key; when absent the provider falls back to `GEMINI_API_KEY`.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_vision_model")]
    pub vision_model: String,
    #[serde(default)]
    pub auth: ProviderAuth,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            text_model: default_text_model(),
            vision_model: default_vision_model(),
            auth: ProviderAuth::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub gemini: GeminiSettings,
}

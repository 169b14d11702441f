use serde::{Deserialize, Serialize};

pub const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const SYSTEM_PROMPT: &str = "당신은 'La Maison'이라는 프렌치 레스토랑의 친절한 AI 어시스턴트입니다. 메뉴 추천, 예약 안내, 위치 안내 등을 도와줍니다. 답변은 한국어로 정중하게 해주세요.";

pub const RESTAURANT_ADDRESS: &str = "대구시 수성구 동대구로 383, 5층";

/// Fixed settings for the site's interactive widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub completions_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: String,
    /// Prefix a chat credential must start with to be accepted
    pub credential_prefix: String,
    pub credential_storage_key: String,
    pub draft_storage_key: String,
    /// Interval between draft autosave ticks
    pub autosave_interval_ms: u32,
    /// Stand-in latency for the reservation submission
    pub submission_delay_ms: u32,
    /// Delay before the "key required" reply shows up in the transcript
    pub key_prompt_delay_ms: u32,
    pub restaurant_address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            completions_url: COMPLETIONS_URL.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 150,
            system_prompt: SYSTEM_PROMPT.to_string(),
            credential_prefix: "sk-".to_string(),
            credential_storage_key: "openai_api_key".to_string(),
            draft_storage_key: "reservationDraft".to_string(),
            autosave_interval_ms: 5000,
            submission_delay_ms: 1500,
            key_prompt_delay_ms: 500,
            restaurant_address: RESTAURANT_ADDRESS.to_string(),
        }
    }
}

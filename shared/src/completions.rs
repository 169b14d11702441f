//! Wire types and client for the chat-completions endpoint.
//!
//! Each request is stateless: the fixed system persona plus the latest user
//! message, nothing from earlier turns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::ChatError;

pub const GENERIC_API_FAILURE: &str = "API 호출 실패";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn for_message(config: &SiteConfig, user_text: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                WireMessage {
                    role: Role::System,
                    content: config.system_prompt.clone(),
                },
                WireMessage {
                    role: Role::User,
                    content: user_text.to_string(),
                },
            ],
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Status and body of a raw HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Map a completions response to the assistant's reply text
pub fn interpret_reply(reply: &HttpReply) -> Result<String, ChatError> {
    if !reply.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&reply.body)
            .unwrap_or_default()
            .error
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| GENERIC_API_FAILURE.to_string());
        return Err(ChatError::Http {
            status: reply.status,
            message,
        });
    }

    let response: CompletionResponse = serde_json::from_str(&reply.body)
        .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| ChatError::MalformedResponse("no choices in response".to_string()))
}

/// Performs the raw JSON POST; the browser build uses `fetch`
#[async_trait(?Send)]
pub trait CompletionsTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &CompletionRequest,
    ) -> Result<HttpReply, ChatError>;
}

pub struct CompletionsClient<T> {
    transport: T,
    url: String,
}

impl<T: CompletionsTransport> CompletionsClient<T> {
    pub fn new(transport: T, config: &SiteConfig) -> Self {
        Self {
            transport,
            url: config.completions_url.clone(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn complete(&self, bearer: &str, request: &CompletionRequest) -> Result<String, ChatError> {
        log::debug!("💬 CHAT: POST {}", self.url);
        let reply = self.transport.post_json(&self.url, bearer, request).await?;
        interpret_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest::for_message(&SiteConfig::default(), "오늘 영업하나요?");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["max_tokens"], 150);
        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
        assert_eq!(value["messages"][0]["role"], "system");
        assert!(value["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("La Maison"));
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "오늘 영업하나요?");
    }

    #[test]
    fn test_success_reply() {
        let reply = HttpReply::new(200, r#"{"choices":[{"message":{"role":"assistant","content":"안녕하세요"}}]}"#);
        assert_eq!(interpret_reply(&reply).unwrap(), "안녕하세요");
    }

    #[test]
    fn test_success_reply_without_role() {
        let reply = HttpReply::new(200, r#"{"choices":[{"message":{"content":"안녕하세요"}}]}"#);
        assert_eq!(interpret_reply(&reply).unwrap(), "안녕하세요");
    }

    #[test]
    fn test_error_reply_surfaces_api_message() {
        let reply = HttpReply::new(401, r#"{"error":{"message":"invalid_key"}}"#);
        assert_eq!(
            interpret_reply(&reply),
            Err(ChatError::Http {
                status: 401,
                message: "invalid_key".to_string()
            })
        );
    }

    #[test]
    fn test_error_reply_without_message() {
        let reply = HttpReply::new(500, "<html>oops</html>");
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_API_FAILURE);
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let reply = HttpReply::new(200, r#"{"choices":[]}"#);
        assert!(matches!(
            interpret_reply(&reply),
            Err(ChatError::MalformedResponse(_))
        ));
    }
}

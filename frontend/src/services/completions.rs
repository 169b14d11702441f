use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{ChatError, CompletionRequest, CompletionsTransport, HttpReply};

/// Completions transport over the browser's `fetch`
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl CompletionsTransport for FetchTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: &CompletionRequest,
    ) -> Result<HttpReply, ChatError> {
        let response = Request::post(url)
            .header("Authorization", &format!("Bearer {}", bearer))
            .json(body)
            .map_err(|e| ChatError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        Ok(HttpReply::new(status, text))
    }
}

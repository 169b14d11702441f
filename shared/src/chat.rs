//! Chat panel state and the send-message flow.
//!
//! [`ChatController`] owns the panel state, the stored credential and the
//! transcript. Sending is split into [`ChatController::begin_send`] and
//! [`ChatController::finish_send`] so the UI can release its borrow of the
//! controller while the request is in flight; [`ChatController::send_message`]
//! runs both around a [`CompletionsClient`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::completions::{CompletionRequest, CompletionsClient, CompletionsTransport};
use crate::config::SiteConfig;
use crate::error::ChatError;
use crate::storage::KeyValueStore;

pub const KEY_SAVED_MESSAGE: &str = "API Key가 저장되었습니다. 이제 대화를 시작해보세요!";
pub const ERROR_REPLY_PREFIX: &str = "죄송합니다. 오류가 발생했습니다: ";

/// API key used as the bearer token for completions requests
#[derive(Clone, PartialEq, Eq)]
pub struct ChatCredential(String);

impl ChatCredential {
    /// Accepts the trimmed input only if it starts with `prefix`
    pub fn parse(input: &str, prefix: &str) -> Result<Self, ChatError> {
        let key = input.trim();
        if key.starts_with(prefix) {
            Ok(Self(key.to_string()))
        } else {
            Err(ChatError::InvalidCredential)
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ChatCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChatCredential([REDACTED])")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPanelState {
    Closed,
    /// Open, but no credential is stored yet
    OpenAwaitingKey,
    OpenReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Message(ChatMessage),
    /// Typing indicator for a pending request
    Loading { id: u64 },
}

impl TranscriptEntry {
    pub fn class_name(&self) -> &'static str {
        match self {
            TranscriptEntry::Message(ChatMessage { role: ChatRole::User, .. }) => "message user-message",
            _ => "message bot-message",
        }
    }
}

/// Whether pressing send may take the typed text out of the input.
///
/// While a reply is pending the text stays where it is, so a second send
/// attempt never discards it.
pub fn accepts_input(text: &str, waiting: bool) -> bool {
    !waiting && !text.trim().is_empty()
}

/// What the UI has to do after the visitor pressed send
#[derive(Debug, Clone, PartialEq)]
pub enum SendStep {
    /// Blank input, nothing happened
    Ignored,
    /// Another request from this panel is still pending
    Busy,
    /// No credential stored: show the key prompt
    NeedsCredential,
    Request {
        loading_id: u64,
        credential: ChatCredential,
        request: CompletionRequest,
    },
}

#[derive(Debug, Clone)]
pub struct ChatController {
    config: SiteConfig,
    open: bool,
    credential: Option<ChatCredential>,
    transcript: Vec<TranscriptEntry>,
    next_loading_id: u64,
    in_flight: bool,
}

impl ChatController {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            open: false,
            credential: None,
            transcript: Vec::new(),
            next_loading_id: 1,
            in_flight: false,
        }
    }

    /// Restore the credential saved by an earlier visit, if any
    pub fn load<S: KeyValueStore + ?Sized>(config: SiteConfig, store: &S) -> Self {
        let credential = store
            .get(&config.credential_storage_key)
            .filter(|key| !key.trim().is_empty())
            .map(ChatCredential);
        Self {
            credential,
            ..Self::new(config)
        }
    }

    pub fn state(&self) -> ChatPanelState {
        match (self.open, self.credential.is_some()) {
            (false, _) => ChatPanelState::Closed,
            (true, false) => ChatPanelState::OpenAwaitingKey,
            (true, true) => ChatPanelState::OpenReady,
        }
    }

    /// Whether the credential input should be displayed
    pub fn shows_key_prompt(&self) -> bool {
        self.state() == ChatPanelState::OpenAwaitingKey
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn toggle(&mut self) -> ChatPanelState {
        self.open = !self.open;
        self.state()
    }

    /// Validate and persist a credential. Invalid input persists nothing.
    pub fn save_credential<S: KeyValueStore + ?Sized>(
        &mut self,
        input: &str,
        store: &S,
    ) -> Result<(), ChatError> {
        let credential = ChatCredential::parse(input, &self.config.credential_prefix)?;
        store.set(&self.config.credential_storage_key, credential.expose())?;
        self.credential = Some(credential);
        self.push_assistant(KEY_SAVED_MESSAGE);
        log::info!("🔑 CHAT: credential saved");
        Ok(())
    }

    pub fn begin_send(&mut self, text: &str) -> SendStep {
        let text = text.trim();
        if text.is_empty() {
            return SendStep::Ignored;
        }
        if self.in_flight {
            return SendStep::Busy;
        }

        self.transcript.push(TranscriptEntry::Message(ChatMessage {
            role: ChatRole::User,
            text: text.to_string(),
        }));

        let Some(credential) = self.credential.clone() else {
            log::warn!("⚠️ CHAT: message sent without a credential");
            return SendStep::NeedsCredential;
        };

        let loading_id = self.next_loading_id;
        self.next_loading_id += 1;
        self.in_flight = true;
        self.transcript.push(TranscriptEntry::Loading { id: loading_id });

        SendStep::Request {
            loading_id,
            credential,
            request: CompletionRequest::for_message(&self.config, text),
        }
    }

    /// Reply to a send attempted without a credential. A no-op once a
    /// credential has been saved in the meantime; the panel's open state is
    /// left alone.
    pub fn prompt_for_credential(&mut self) {
        if self.credential.is_none() {
            self.push_assistant(&ChatError::MissingCredential.to_string());
        }
    }

    pub fn finish_send(&mut self, loading_id: u64, result: Result<String, ChatError>) {
        self.transcript
            .retain(|entry| *entry != TranscriptEntry::Loading { id: loading_id });
        self.in_flight = false;

        match result {
            Ok(reply) => self.push_assistant(&reply),
            Err(e) => {
                log::warn!("⚠️ CHAT: completion failed: {}", e);
                self.push_assistant(&format!("{}{}", ERROR_REPLY_PREFIX, e));
            }
        }
    }

    pub async fn send_message<T: CompletionsTransport>(
        &mut self,
        text: &str,
        client: &CompletionsClient<T>,
    ) -> SendStep {
        let step = self.begin_send(text);
        match &step {
            SendStep::Request {
                loading_id,
                credential,
                request,
            } => {
                let result = client.complete(credential.expose(), request).await;
                self.finish_send(*loading_id, result);
            }
            SendStep::NeedsCredential => self.prompt_for_credential(),
            SendStep::Ignored | SendStep::Busy => {}
        }
        step
    }

    fn push_assistant(&mut self, text: &str) {
        self.transcript.push(TranscriptEntry::Message(ChatMessage {
            role: ChatRole::Assistant,
            text: text.to_string(),
        }));
    }
}

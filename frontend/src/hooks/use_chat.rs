use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::{ChatController, ChatPanelState, CompletionsClient, SendStep, SiteConfig, TranscriptEntry};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::completions::FetchTransport;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct ChatState {
    pub panel: ChatPanelState,
    pub shows_key_prompt: bool,
    pub waiting: bool,
    pub transcript: Vec<TranscriptEntry>,
}

#[derive(Clone)]
pub struct UseChatActions {
    pub toggle: Callback<MouseEvent>,
    pub save_key: Callback<String>,
    pub send: Callback<String>,
}

pub struct UseChatResult {
    pub state: ChatState,
    pub actions: UseChatActions,
}

#[hook]
pub fn use_chat(config: &SiteConfig) -> UseChatResult {
    let controller = {
        let config = config.clone();
        use_mut_ref(move || ChatController::load(config, &BrowserStorage))
    };
    let client = {
        let config = config.clone();
        use_memo((), move |_| CompletionsClient::new(FetchTransport, &config))
    };
    let trigger = use_force_update();

    let toggle = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: MouseEvent| {
            let state = controller.borrow_mut().toggle();
            Logger::debug_with_component("chat-hook", &format!("💬 panel {:?}", state));
            trigger.force_update();
        })
    };

    let save_key = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |input: String| {
            let saved = controller.borrow_mut().save_credential(&input, &BrowserStorage);
            match saved {
                Ok(()) => trigger.force_update(),
                // Blocking alert; the input keeps its value for correction
                Err(e) => gloo::dialogs::alert(&e.to_string()),
            }
        })
    };

    let send = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        let key_prompt_delay_ms = config.key_prompt_delay_ms;
        Callback::from(move |text: String| {
            let step = controller.borrow_mut().begin_send(&text);
            trigger.force_update();

            let controller = controller.clone();
            let trigger = trigger.clone();
            let client = Rc::clone(&client);
            match step {
                SendStep::Request {
                    loading_id,
                    credential,
                    request,
                } => spawn_local(async move {
                    let result = client.complete(credential.expose(), &request).await;
                    controller.borrow_mut().finish_send(loading_id, result);
                    trigger.force_update();
                }),
                SendStep::NeedsCredential => spawn_local(async move {
                    TimeoutFuture::new(key_prompt_delay_ms).await;
                    controller.borrow_mut().prompt_for_credential();
                    trigger.force_update();
                }),
                SendStep::Busy | SendStep::Ignored => {}
            }
        })
    };

    let state = {
        let controller = controller.borrow();
        ChatState {
            panel: controller.state(),
            shows_key_prompt: controller.shows_key_prompt(),
            waiting: controller.is_waiting(),
            transcript: controller.transcript().to_vec(),
        }
    };

    UseChatResult {
        state,
        actions: UseChatActions { toggle, save_key, send },
    }
}

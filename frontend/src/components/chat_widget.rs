use shared::{accepts_input, ChatPanelState, TranscriptEntry};
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_chat::{ChatState, UseChatActions};

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub state: ChatState,
    pub on_toggle: Callback<MouseEvent>,
    pub on_save_key: Callback<String>,
    pub on_send: Callback<String>,
}

impl ChatWidgetProps {
    pub fn from_hook(state: ChatState, actions: UseChatActions) -> Self {
        Self {
            state,
            on_toggle: actions.toggle,
            on_save_key: actions.save_key,
            on_send: actions.send,
        }
    }
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let message = use_state(String::new);
    let api_key = use_state(String::new);
    let messages_ref = use_node_ref();
    let input_ref = use_node_ref();

    let is_open = props.state.panel != ChatPanelState::Closed;

    // Keep the newest message in view
    {
        let messages_ref = messages_ref.clone();
        use_effect_with(props.state.transcript.len(), move |_| {
            if let Some(list) = messages_ref.cast::<HtmlElement>() {
                list.set_scroll_top(list.scroll_height());
            }
        });
    }

    {
        let input_ref = input_ref.clone();
        use_effect_with(is_open, move |is_open| {
            if *is_open {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        });
    }

    let send = {
        let message = message.clone();
        let on_send = props.on_send.clone();
        let waiting = props.state.waiting;
        move || {
            let text = (*message).clone();
            if !accepts_input(&text, waiting) {
                return;
            }
            message.set(String::new());
            on_send.emit(text);
        }
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_keypress = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send();
            }
        })
    };

    let on_send_click = Callback::from(move |_: MouseEvent| send());

    let on_key_input = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            api_key.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_save_key = {
        let api_key = api_key.clone();
        let on_save_key = props.on_save_key.clone();
        Callback::from(move |_: MouseEvent| on_save_key.emit((*api_key).clone()))
    };

    html! {
        <div class="chat-widget">
            <button type="button" class="chat-toggle" onclick={props.on_toggle.clone()} title="AI 어시스턴트">
                {"💬"}
            </button>

            <div class={classes!("chat-window", is_open.then_some("active"))} id="chatWindow">
                <div class="chat-header">
                    <span>{"La Maison AI 어시스턴트"}</span>
                    <button type="button" class="chat-close" onclick={props.on_toggle.clone()}>{"×"}</button>
                </div>

                {if props.state.shows_key_prompt {
                    html! {
                        <div class="api-key-config" id="apiKeyConfig">
                            <input
                                type="password"
                                id="apiKeyInput"
                                placeholder="sk-..."
                                value={(*api_key).clone()}
                                oninput={on_key_input}
                            />
                            <button type="button" onclick={on_save_key}>{"저장"}</button>
                        </div>
                    }
                } else { html! {} }}

                <div class="chat-messages" id="chatMessages" ref={messages_ref}>
                    {for props.state.transcript.iter().map(|entry| match entry {
                        TranscriptEntry::Message(message) => html! {
                            <div class={entry.class_name()}>{&message.text}</div>
                        },
                        TranscriptEntry::Loading { .. } => html! {
                            <div class={entry.class_name()}>
                                <div class="typing-indicator">
                                    <div class="typing-dot"></div>
                                    <div class="typing-dot"></div>
                                    <div class="typing-dot"></div>
                                </div>
                            </div>
                        },
                    })}
                </div>

                <div class="chat-input-area">
                    <input
                        type="text"
                        id="chatInput"
                        ref={input_ref}
                        placeholder="메시지를 입력하세요..."
                        value={(*message).clone()}
                        oninput={on_message_input}
                        onkeypress={on_keypress}
                    />
                    <button type="button" class="chat-send" onclick={on_send_click} disabled={props.state.waiting}>
                        {"전송"}
                    </button>
                </div>
            </div>
        </div>
    }
}

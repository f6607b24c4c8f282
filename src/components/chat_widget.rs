//! Chat widget: message panel, waiting indicator, and input form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget binds four elements (`chat-form`, `message-input`,
//! `chat-messages`, `typing-indicator`) and mediates between them and the
//! ask endpoint. Each submission spawns one local task; nothing serializes
//! submissions, so replies append in arrival order.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::message_item::ChatMessageItem;
use crate::components::typing_indicator::TypingIndicator;
use crate::config::ChatConfig;
use crate::net::types::{AskError, AskReply};
use crate::state::chat::{ChatMessage, ChatState};
use crate::util::clock;
use crate::util::keys::{KeyAction, key_action};

pub const CHAT_FORM_ID: &str = "chat-form";
pub const MESSAGE_INPUT_ID: &str = "message-input";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";

/// Handle to one widget instance, created once per mount.
///
/// All fields are arena handles, so the controller is `Copy` and can be moved
/// into event handlers and spawned tasks freely. A task may outlive the
/// widget (navigation while a request is in flight), so every access after
/// the first await goes through the `try_` accessors.
#[derive(Clone, Copy)]
pub struct ChatController {
    chat: RwSignal<ChatState>,
    input: RwSignal<String>,
    panel: NodeRef<leptos::html::Div>,
    config: StoredValue<ChatConfig>,
    scroll_requests: RwSignal<u64>,
}

impl ChatController {
    pub fn new(initial: ChatState, config: ChatConfig) -> Self {
        Self {
            chat: RwSignal::new(initial),
            input: RwSignal::new(String::new()),
            panel: NodeRef::new(),
            config: StoredValue::new(config),
            scroll_requests: RwSignal::new(0),
        }
    }

    pub fn chat(self) -> RwSignal<ChatState> {
        self.chat
    }

    pub fn input(self) -> RwSignal<String> {
        self.input
    }

    pub fn panel(self) -> NodeRef<leptos::html::Div> {
        self.panel
    }

    /// Number of scroll-to-bottom requests issued so far.
    pub fn scroll_requests(self) -> RwSignal<u64> {
        self.scroll_requests
    }

    /// Initial scroll, covering server-rendered history.
    pub fn mount(self) {
        self.request_scroll();
    }

    /// Submit the current input value.
    ///
    /// Blank input is ignored and left in place. Otherwise the user message is
    /// appended, the input cleared, the indicator shown, and one request sent.
    pub fn submit(self) {
        let Some(raw) = self.input.try_get_untracked() else {
            return;
        };
        let now = clock::now_ms();
        let Some(question) = self.chat.try_update(|c| c.submit(&raw, now)).flatten() else {
            return;
        };
        self.input.set(String::new());
        self.request_scroll();

        let Some(endpoint) = self.config.try_with_value(|c| c.endpoint.clone()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask(&endpoint, &question).await;
            self.settle(outcome);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (endpoint, question);
    }

    /// Apply the outcome of one request: the reply, or the fallback apology.
    ///
    /// Transport detail goes to the developer console only. Outcomes arriving
    /// after the widget was disposed are logged and dropped.
    pub fn settle(self, outcome: Result<AskReply, AskError>) {
        match &outcome {
            Ok(AskReply::Failure(message)) => leptos::logging::warn!("chat endpoint reported error: {message}"),
            Ok(AskReply::Answer(_)) => {}
            Err(err) => leptos::logging::error!("chat request failed: {err}"),
        }

        let Some(fallback) = self.config.try_with_value(|c| c.fallback_text.clone()) else {
            leptos::logging::warn!("chat reply arrived after widget was disposed");
            return;
        };
        let now = clock::now_ms();
        if self.chat.try_update(|c| c.settle(&outcome, &fallback, now)).is_some() {
            self.request_scroll();
        }
    }

    /// Handle a keydown in the message input.
    ///
    /// Returns `true` when the key submitted the message, in which case the
    /// default newline must be suppressed.
    pub fn on_key(self, key: &str, shift_held: bool) -> bool {
        if key_action(key, shift_held) == KeyAction::Submit {
            self.submit();
            return true;
        }
        false
    }

    pub fn on_keydown(self, ev: &leptos::ev::KeyboardEvent) {
        if self.on_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
        }
    }

    fn request_scroll(self) {
        let _ = self.scroll_requests.try_update(|n| *n += 1);
    }

    /// Scroll the message panel to its maximum extent.
    ///
    /// Deferred to the next animation frame so freshly appended nodes are
    /// laid out before `scroll_height` is read.
    pub fn scroll_to_bottom(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.panel.get() {
                request_animation_frame(move || {
                    el.set_scroll_top(bottom_scroll_top(el.scroll_height(), el.client_height()));
                });
            }
        }
    }
}

/// Maximum `scroll_top` of a panel with the given content and viewport heights.
pub fn bottom_scroll_top(scroll_height: i32, client_height: i32) -> i32 {
    (scroll_height - client_height).max(0)
}

/// Chat widget with optional server-rendered history.
///
/// Reads [`ChatConfig`] from context, falling back to defaults.
#[component]
pub fn ChatWidget(#[prop(optional)] history: Vec<ChatMessage>) -> impl IntoView {
    let config = use_context::<ChatConfig>().unwrap_or_default();
    let placeholder = config.placeholder.clone();
    let controller = ChatController::new(ChatState::with_history(history), config);
    let chat = controller.chat();
    let input = controller.input();

    let scroll_requests = controller.scroll_requests();
    Effect::new(move || {
        let _ = scroll_requests.get();
        controller.scroll_to_bottom();
    });
    controller.mount();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| controller.on_keydown(&ev);

    let indicator_display = Signal::derive(move || chat.with(ChatState::indicator_display));

    view! {
        <div class="chat-widget">
            <div id=CHAT_MESSAGES_ID class="chat-messages" node_ref=controller.panel()>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|message| view! { <ChatMessageItem message=message/> })
                        .collect::<Vec<_>>()
                }}
                <TypingIndicator display=indicator_display/>
            </div>

            <form id=CHAT_FORM_ID class="chat-form" on:submit=on_submit>
                <textarea
                    id=MESSAGE_INPUT_ID
                    class="chat-form__input"
                    rows="1"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button type="submit" class="btn btn--primary chat-form__send">
                    "Send"
                </button>
            </form>
        </div>
    }
}

//! One rendered chat message.

use leptos::prelude::*;

use crate::state::chat::ChatMessage;

/// Message bubble with its `hour:minute` label.
///
/// Text is rendered as a text node, so markup in replies is shown literally.
#[component]
pub fn ChatMessageItem(message: ChatMessage) -> impl IntoView {
    let class = message.origin.css_class();

    view! {
        <div class=class data-message-id=message.id>
            <div class="message-content">
                <p>{message.text}</p>
                <div class="message-time">{message.time_label}</div>
            </div>
        </div>
    }
}

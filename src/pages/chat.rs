//! Coach chat page hosting the widget.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chat_widget::ChatWidget;

/// Page frame around a single [`ChatWidget`].
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <Title text="Coach Chat"/>
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Coach Chat"</h1>
                <p>"Ask about training, technique, or recovery."</p>
            </header>
            <ChatWidget/>
        </div>
    }
}

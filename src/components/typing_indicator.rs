//! Waiting indicator shown while a reply is outstanding.

use leptos::prelude::*;

/// Element id the host stylesheet targets.
pub const TYPING_INDICATOR_ID: &str = "typing-indicator";

/// Three-dot indicator toggled through its `display` style.
#[component]
pub fn TypingIndicator(#[prop(into)] display: Signal<&'static str>) -> impl IntoView {
    view! {
        <div id=TYPING_INDICATOR_ID class="typing-indicator" style:display=move || display.get()>
            <span class="typing-indicator__dot"></span>
            <span class="typing-indicator__dot"></span>
            <span class="typing-indicator__dot"></span>
        </div>
    }
}

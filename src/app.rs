//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ChatConfig;
use crate::pages::chat::ChatPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the widget config and routes `/` and `/chat` to the chat page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ChatConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid chat config, using defaults: {e}");
        ChatConfig::default()
    });
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-widget.css"/>
        <Title text="Coach"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}

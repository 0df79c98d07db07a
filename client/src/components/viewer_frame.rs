//! Embedded remote desktop viewer.

use leptos::prelude::*;

use crate::state::chat::{ChatState, ViewerState};

#[component]
pub fn ViewerFrame() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <section class="viewer">
            {move || match chat.with(|s| s.viewer.clone()) {
                ViewerState::Connecting => {
                    view! { <div class="viewer__status">"Connecting to the desktop..."</div> }.into_any()
                }
                ViewerState::Unavailable => {
                    view! { <div class="viewer__status">"Desktop viewer unavailable"</div> }.into_any()
                }
                ViewerState::Ready { url, verified } => {
                    view! {
                        <iframe class="viewer__frame" class:viewer__frame--unverified=!verified src=url title="Remote desktop"></iframe>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

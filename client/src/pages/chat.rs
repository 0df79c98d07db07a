//! Assistant chat page with the remote desktop viewer alongside.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submitted message opens one streamed completion; the reply is
//! reduced into the last message as chunks arrive. The viewer URL comes
//! from the backend's env info and is pinged a few times before loading.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{chat_message::ChatMessageView, viewer_frame::ViewerFrame};
use crate::state::chat::ChatState;

#[cfg(feature = "hydrate")]
use crate::net::api::{chat_api_base, resolve_viewer};
#[cfg(feature = "hydrate")]
use crate::net::chat_stream::stream_chat;
#[cfg(feature = "hydrate")]
use crate::state::chat::ViewerState;
#[cfg(feature = "hydrate")]
use crate::util::autoscroll::should_autoscroll;

#[cfg(feature = "hydrate")]
fn connect_viewer(chat: RwSignal<ChatState>) {
    leptos::task::spawn_local(async move {
        let viewer = match resolve_viewer(chat_api_base()).await {
            Some((url, verified)) => ViewerState::Ready { url, verified },
            None => ViewerState::Unavailable,
        };
        chat.update(|s| s.viewer = viewer);
    });
}

/// Chat page at `/chat`.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    // Whether the transcript was at the bottom at the last scroll event.
    let follow = StoredValue::new(true);

    #[cfg(feature = "hydrate")]
    {
        if chat.with_untracked(|s| s.viewer == ViewerState::Connecting) {
            connect_viewer(chat);
        }
    }

    Effect::new(move || {
        chat.track();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                if follow.get_value() {
                    el.set_scroll_top(el.scroll_height());
                }
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(request) = chat.try_update(|s| s.submit(&text)).flatten() else {
            return;
        };
        input.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = stream_chat(chat_api_base(), &request, chat).await {
                leptos::logging::warn!("chat stream failed: {e}");
                chat.update(|s| s.fail(e.to_string()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_scroll = move |_: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get_untracked() {
                follow.set_value(should_autoscroll(el.scroll_height(), el.scroll_top(), el.client_height()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = follow;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        let text = input.get();
        chat.with(|s| s.can_send(&text))
    };

    view! {
        <Title text="Assistant"/>
        <div class="chat-page">
            <section class="chat">
                <div class="chat__messages" node_ref=messages_ref on:scroll=on_scroll>
                    {move || {
                        chat.with(|s| s.conversation.messages().to_vec())
                            .into_iter()
                            .map(|message| view! { <ChatMessageView message=message/> })
                            .collect::<Vec<_>>()
                    }}
                    {move || {
                        chat.with(|s| s.conversation.is_typing())
                            .then(|| view! { <div class="chat__typing">"Assistant is typing..."</div> })
                    }}
                    {move || {
                        chat.with(|s| s.last_error.clone())
                            .map(|message| view! { <div class="chat__error">{message}</div> })
                    }}
                    {move || {
                        chat.with(ChatState::skipped_notice)
                            .map(|notice| view! { <div class="chat__notice">{notice}</div> })
                    }}
                </div>
                <div class="chat__input-row">
                    <textarea
                        class="chat__input"
                        placeholder="Ask the assistant..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="btn btn--primary chat__send" on:click=move |_| do_send() disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
            </section>
            <ViewerFrame/>
        </div>
    }
}

//! One chat bubble, with a tool activity card when the assistant is
//! calling or has called a tool.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use frames::{ChatMessage, Sender, ToolStatus};
use leptos::prelude::*;

/// What the tool card shows for a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCard {
    pub heading: String,
    pub detail: Option<String>,
    pub pending: bool,
}

/// Card for the message's latest tool activity, if any.
#[must_use]
pub fn tool_card(message: &ChatMessage) -> Option<ToolCard> {
    let name = message.tool_name.as_deref().unwrap_or("tool");
    match message.status? {
        ToolStatus::ToolCall => Some(ToolCard {
            heading: format!("Calling {name}"),
            detail: message.tool_input.clone(),
            pending: true,
        }),
        ToolStatus::ToolResponse => Some(ToolCard {
            heading: format!("{name} finished"),
            detail: message.tool_result.clone(),
            pending: false,
        }),
    }
}

#[must_use]
pub fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "chat-message chat-message--user",
        Sender::Assistant => "chat-message chat-message--assistant",
    }
}

#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let card = tool_card(&message);
    let body = match message.sender {
        Sender::Assistant if !message.text.is_empty() => {
            let rendered = cookbook::render_body(&message.text);
            view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
        }
        _ => view! { <span class="chat-message__text">{message.text.clone()}</span> }.into_any(),
    };

    view! {
        <div class=bubble_class(message.sender)>
            {card.map(|card| {
                view! {
                    <div class="chat-tool" class:chat-tool--pending=card.pending>
                        <div class="chat-tool__heading">{card.heading}</div>
                        {card.detail.map(|detail| view! { <pre class="chat-tool__detail">{detail}</pre> })}
                    </div>
                }
            })}
            {body}
        </div>
    }
}

use super::*;

fn tool(name: &str) -> ToolActivity {
    ToolActivity {
        name: Some(name.to_owned()),
        id: Some("call-1".to_owned()),
        input: Some("{}".to_owned()),
        result: None,
    }
}

// =============================================================
// reduce
// =============================================================

#[test]
fn text_delta_appends_and_clears_status() {
    let mut message = ChatMessage::assistant("Hello");
    message.status = Some(ToolStatus::ToolCall);
    message.tool_name = Some("search".to_owned());

    let next = reduce(message, &ChatEvent::TextDelta(", world".to_owned()));
    assert_eq!(next.text, "Hello, world");
    assert_eq!(next.status, None);
    // Tool fields survive; only the status badge is cleared.
    assert_eq!(next.tool_name.as_deref(), Some("search"));
}

#[test]
fn tool_call_sets_fields_without_touching_text() {
    let message = ChatMessage::assistant("Let me check.");
    let next = reduce(message, &ChatEvent::ToolCall(tool("browser_open")));
    assert_eq!(next.text, "Let me check.");
    assert_eq!(next.status, Some(ToolStatus::ToolCall));
    assert_eq!(next.tool_name.as_deref(), Some("browser_open"));
    assert_eq!(next.tool_id.as_deref(), Some("call-1"));
    assert_eq!(next.tool_input.as_deref(), Some("{}"));
}

#[test]
fn tool_response_overwrites_every_tool_field() {
    let message = reduce(ChatMessage::placeholder(), &ChatEvent::ToolCall(tool("a")));
    let response = ToolActivity {
        name: Some("a".to_owned()),
        id: None,
        input: None,
        result: Some("done".to_owned()),
    };
    let next = reduce(message, &ChatEvent::ToolResponse(response));
    assert_eq!(next.status, Some(ToolStatus::ToolResponse));
    assert_eq!(next.tool_id, None);
    assert_eq!(next.tool_input, None);
    assert_eq!(next.tool_result.as_deref(), Some("done"));
}

#[test]
fn stream_end_leaves_message_unchanged() {
    let message = ChatMessage::assistant("x");
    assert_eq!(reduce(message.clone(), &ChatEvent::StreamEnd), message);
}

// =============================================================
// Conversation
// =============================================================

#[test]
fn new_conversation_starts_with_greeting() {
    let conversation = Conversation::new();
    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].text, GREETING);
    assert_eq!(conversation.messages()[0].sender, Sender::Assistant);
    assert!(!conversation.is_typing());
}

#[test]
fn submit_ignores_blank_input() {
    let mut conversation = Conversation::new();
    assert!(conversation.submit("   ", DEFAULT_MODEL).is_none());
    assert_eq!(conversation.messages().len(), 1);
    assert!(!conversation.is_typing());
}

#[test]
fn submit_builds_request_and_opens_stream() {
    let mut conversation = Conversation::new();
    let request = conversation.submit("What is Rust?", "qwen-max").unwrap();

    assert_eq!(request.model, "qwen-max");
    assert!(request.stream);
    let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::Assistant, Role::User]);
    assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
    assert_eq!(request.messages[2].content, "What is Rust?");

    assert!(conversation.is_typing());
    assert_eq!(conversation.messages().len(), 3);
    assert_eq!(conversation.last(), Some(&ChatMessage::placeholder()));
}

#[test]
fn abort_before_any_frame_drops_placeholder() {
    let mut conversation = Conversation::new();
    assert!(conversation.submit("hi", DEFAULT_MODEL).is_some());
    conversation.abort_stream();
    assert!(!conversation.is_typing());
    assert_eq!(conversation.messages().len(), 2);
    assert_eq!(conversation.last().map(|m| m.sender), Some(Sender::User));
}

#[test]
fn abort_after_partial_reply_keeps_it() {
    let mut conversation = Conversation::new();
    assert!(conversation.submit("hi", DEFAULT_MODEL).is_some());
    conversation.apply(ChatEvent::ToolCall(tool("browse")));
    conversation.abort_stream();
    assert!(!conversation.is_typing());
    assert_eq!(conversation.messages().len(), 3);
    assert_eq!(conversation.last().and_then(|m| m.tool_name.as_deref()), Some("browse"));
}

#[test]
fn request_skips_blank_history() {
    let mut conversation = Conversation::empty();
    conversation.begin_stream();
    conversation.end_stream();
    assert!(conversation.push_user("hi"));

    let request = conversation.request(DEFAULT_MODEL);
    assert_eq!(request.messages.len(), 2);
}

#[test]
fn request_serializes_to_wire_shape() {
    let mut conversation = Conversation::empty();
    assert!(conversation.push_user("hi"));
    let json = serde_json::to_value(conversation.request("m")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "model": "m",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": "hi"}
            ],
            "stream": true
        })
    );
}

#[test]
fn apply_mutates_only_last_message() {
    let mut conversation = Conversation::new();
    conversation.submit("hi", DEFAULT_MODEL).unwrap();
    conversation.apply(ChatEvent::TextDelta("Hel".to_owned()));
    conversation.apply(ChatEvent::ToolCall(tool("search")));
    conversation.apply(ChatEvent::TextDelta("lo".to_owned()));

    let messages = conversation.messages();
    assert_eq!(messages[0].text, GREETING);
    assert_eq!(messages[1].text, "hi");
    assert_eq!(messages[2].text, "Hello");
    assert_eq!(messages[2].status, None);
}

#[test]
fn stream_end_clears_typing() {
    let mut conversation = Conversation::new();
    conversation.submit("hi", DEFAULT_MODEL).unwrap();
    conversation.apply(ChatEvent::StreamEnd);
    assert!(!conversation.is_typing());
    assert_eq!(conversation.messages().len(), 3);
}

#[test]
fn apply_on_empty_conversation_creates_placeholder() {
    let mut conversation = Conversation::empty();
    conversation.apply(ChatEvent::TextDelta("x".to_owned()));
    assert_eq!(conversation.messages(), &[ChatMessage::assistant("x")]);
}

use super::*;
use frames::ToolStatus;

const BODY: &str = concat!(
    "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n",
    "\n",
    "data: not json\n",
    "data: {\"choices\":[{\"delta\":{\"messageType\":\"TOOL_CALL\",\"toolName\":\"browse\",\"toolId\":\"t1\",\"toolInput\":\"{}\"}}]}\n",
    "data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n",
    "data: [DONE]\n",
);

fn submitted() -> ChatState {
    let mut state = ChatState::default();
    state.submit("hi").unwrap();
    state
}

#[test]
fn completions_url_joins_path() {
    assert_eq!(completions_url("http://localhost:8080/"), "http://localhost:8080/v1/chat/completions");
}

#[test]
fn status_error_names_the_code() {
    assert_eq!(StreamError::Status(500).to_string(), "chat request failed: 500");
}

#[test]
fn chunks_accumulate_into_last_message() {
    let mut state = submitted();
    let mut stream = ChatStream::new();
    let (head, tail) = BODY.as_bytes().split_at(17);
    assert!(apply_bytes(&mut stream, &mut state, head).is_empty());
    let errors = apply_bytes(&mut stream, &mut state, tail);
    assert_eq!(errors.len(), 1);
    assert!(finish_bytes(&mut stream, &mut state).is_empty());

    let last = state.conversation.last().unwrap();
    assert_eq!(last.text, "Hello");
    assert_eq!(last.status, None);
    assert_eq!(last.tool_name.as_deref(), Some("browse"));
    assert_eq!(state.skipped_frames, 1);
    assert!(!state.conversation.is_typing());
}

#[test]
fn tool_frame_sets_status_mid_stream() {
    let mut state = submitted();
    let mut stream = ChatStream::new();
    let cut = BODY.find("data: {\"choices\":[{\"delta\":{\"content\":\"lo\"").unwrap();
    apply_bytes(&mut stream, &mut state, &BODY.as_bytes()[..cut]);
    let last = state.conversation.last().unwrap();
    assert_eq!(last.status, Some(ToolStatus::ToolCall));
    assert_eq!(last.text, "Hel");
    assert!(state.conversation.is_typing());
}

#[test]
fn done_sentinel_ends_stream_before_body_closes() {
    let mut state = submitted();
    let mut stream = ChatStream::new();
    let cut = BODY.find("data: [DONE]").unwrap();
    apply_bytes(&mut stream, &mut state, &BODY.as_bytes()[..cut]);
    assert!(!stream.is_ended());
    apply_bytes(&mut stream, &mut state, b"data: [DONE]\ndata: {\"choices\":[]}\n");
    assert!(stream.is_ended());
    assert!(!state.conversation.is_typing());
}

#[test]
fn native_stream_chat_is_unavailable() {
    let owner = Owner::new();
    owner.with(|| {
        let chat = RwSignal::new(ChatState::default());
        let request = chat.get_untracked().conversation.request("qwen-max");
        let result = futures::executor::block_on(stream_chat("http://localhost:8080", &request, chat));
        assert!(matches!(result, Err(StreamError::Transport(_))));
    });
}

use super::*;

fn data(payload: &str) -> SseFrame {
    SseFrame::Data(payload.to_owned())
}

// =============================================================
// Prefix stripping
// =============================================================

#[test]
fn strip_single_prefix() {
    assert_eq!(strip_data_prefixes("data: {\"a\":1}"), Some("{\"a\":1}"));
}

#[test]
fn strip_repeated_prefixes() {
    assert_eq!(strip_data_prefixes("data: data:data:  {}"), Some("{}"));
}

#[test]
fn strip_rejects_non_data_lines() {
    assert_eq!(strip_data_prefixes("event: message"), None);
    assert_eq!(strip_data_prefixes(": keep-alive"), None);
    assert_eq!(strip_data_prefixes(""), None);
}

// =============================================================
// Line buffering
// =============================================================

#[test]
fn feed_yields_complete_lines_only() {
    let mut decoder = SseDecoder::new();
    let frames: Vec<_> = decoder.feed(b"data: one\ndata: tw").collect();
    assert_eq!(frames, vec![data("one")]);

    let frames: Vec<_> = decoder.feed(b"o\n").collect();
    assert_eq!(frames, vec![data("two")]);
    assert_eq!(decoder.finish(), None);
}

#[test]
fn feed_skips_blank_and_foreign_lines() {
    let mut decoder = SseDecoder::new();
    let input = b"\n\nid: 7\nevent: delta\ndata: x\r\n: ping\n";
    let frames: Vec<_> = decoder.feed(input).collect();
    assert_eq!(frames, vec![data("x")]);
}

#[test]
fn empty_payload_is_skipped() {
    let mut decoder = SseDecoder::new();
    let frames: Vec<_> = decoder.feed(b"data:\ndata:   \ndata: y\n").collect();
    assert_eq!(frames, vec![data("y")]);
}

#[test]
fn multibyte_character_split_across_chunks() {
    let text = "data: 你好\n".as_bytes();
    let mut decoder = SseDecoder::new();
    let mut frames = Vec::new();
    // Split inside the three-byte encoding of the first character.
    frames.extend(decoder.feed(&text[..8]));
    frames.extend(decoder.feed(&text[8..]));
    assert_eq!(frames, vec![data("你好")]);
}

#[test]
fn partially_consumed_iterator_resumes_on_next_feed() {
    let mut decoder = SseDecoder::new();
    let first = decoder.feed(b"data: a\ndata: b\ndata: c\n").next();
    assert_eq!(first, Some(data("a")));

    let rest: Vec<_> = decoder.feed(b"data: d\n").collect();
    assert_eq!(rest, vec![data("b"), data("c"), data("d")]);
}

// =============================================================
// Termination
// =============================================================

#[test]
fn done_sentinel_terminates_stream() {
    let mut decoder = SseDecoder::new();
    let frames: Vec<_> = decoder
        .feed(b"data: a\ndata: [DONE]\ndata: late\n")
        .collect();
    assert_eq!(frames, vec![data("a"), SseFrame::Done]);
    assert!(decoder.is_done());

    let after: Vec<_> = decoder.feed(b"data: later\n").collect();
    assert!(after.is_empty());
    assert_eq!(decoder.finish(), None);
}

#[test]
fn done_sentinel_with_repeated_prefix() {
    let mut decoder = SseDecoder::new();
    let frames: Vec<_> = decoder.feed(b"data: data: [DONE]\n").collect();
    assert_eq!(frames, vec![SseFrame::Done]);
}

#[test]
fn finish_flushes_unterminated_line() {
    let mut decoder = SseDecoder::new();
    assert_eq!(decoder.feed(b"data: tail").count(), 0);
    assert_eq!(decoder.finish(), Some(data("tail")));
    assert_eq!(decoder.finish(), None);
}

#[test]
fn finish_on_empty_buffer_is_none() {
    let mut decoder = SseDecoder::new();
    assert_eq!(decoder.feed(b"data: a\n").count(), 1);
    assert_eq!(decoder.finish(), None);
}

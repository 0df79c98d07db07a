//! Terminal chat turns over the streamed completions endpoint.
//!
//! Each turn posts the whole conversation and echoes the reply as it
//! arrives: text deltas go straight to the writer, tool activity is shown
//! on its own bracketed line. Undecodable frames are logged and skipped.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::io::{self, BufRead, Write};
use std::pin::pin;

use frames::viewer::{CHAT_COMPLETIONS_PATH, endpoint};
use frames::{ChatEvent, ChatStream, Conversation, FrameError, ToolActivity};
use futures_util::{Stream, StreamExt};

use crate::CliError;

fn tool_name(activity: &ToolActivity) -> &str {
    activity.name.as_deref().unwrap_or("tool")
}

/// Write the visible part of `event`.
pub fn echo<W: Write>(event: &ChatEvent, out: &mut W) -> io::Result<()> {
    match event {
        ChatEvent::TextDelta(text) => write!(out, "{text}")?,
        ChatEvent::ToolCall(activity) => writeln!(out, "\n[calling {}]", tool_name(activity))?,
        ChatEvent::ToolResponse(activity) => writeln!(out, "[{} finished]", tool_name(activity))?,
        ChatEvent::StreamEnd => writeln!(out)?,
    }
    out.flush()
}

/// Apply one decoded frame. Returns `true` when the frame was skipped.
fn apply_event<W: Write>(
    event: Result<ChatEvent, FrameError>,
    conversation: &mut Conversation,
    out: &mut W,
) -> io::Result<bool> {
    match event {
        Ok(event) => {
            echo(&event, out)?;
            conversation.apply(event);
            Ok(false)
        }
        Err(error) => {
            tracing::warn!(error = %error, payload = error.payload(), "skipping chat frame");
            Ok(true)
        }
    }
}

async fn drive<S, B, E, W>(body: S, conversation: &mut Conversation, out: &mut W) -> Result<usize, CliError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<CliError>,
    W: Write,
{
    let mut body = pin!(body);
    let mut stream = ChatStream::new();
    let mut skipped = 0_usize;
    while !stream.is_ended() {
        let Some(chunk) = body.next().await else {
            break;
        };
        let chunk = chunk.map_err(Into::into)?;
        let events: Vec<_> = stream.feed(chunk.as_ref()).collect();
        for event in events {
            if apply_event(event, conversation, out)? {
                skipped = skipped.saturating_add(1);
            }
        }
    }
    for event in stream.finish() {
        if apply_event(event, conversation, out)? {
            skipped = skipped.saturating_add(1);
        }
    }
    Ok(skipped)
}

/// Consume a response body into `conversation`, echoing to `out`.
///
/// The typing flag is cleared whether or not the body completes; a body
/// that fails before any frame leaves no empty reply. Returns the number of
/// skipped frames.
///
/// # Errors
///
/// Returns the body's transport error or a write failure on `out`.
pub async fn consume<S, B, E, W>(body: S, conversation: &mut Conversation, out: &mut W) -> Result<usize, CliError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<CliError>,
    W: Write,
{
    let result = drive(body, conversation, out).await;
    if result.is_err() {
        conversation.abort_stream();
    } else {
        conversation.end_stream();
    }
    result
}

/// Send one user turn and stream the reply.
///
/// Blank input sends nothing and returns `Ok(0)`.
///
/// # Errors
///
/// Returns [`CliError::Status`] for a non-success response, or the
/// transport error that ended the body.
pub async fn run_turn<W: Write>(
    client: &reqwest::Client,
    base_url: &str,
    model: &str,
    conversation: &mut Conversation,
    text: &str,
    out: &mut W,
) -> Result<usize, CliError> {
    let Some(request) = conversation.submit(text, model) else {
        return Ok(0);
    };
    let url = endpoint(base_url, CHAT_COMPLETIONS_PATH);
    let response = match client.post(url).json(&request).send().await {
        Ok(response) => response,
        Err(error) => {
            conversation.abort_stream();
            return Err(error.into());
        }
    };
    let status = response.status();
    if !status.is_success() {
        conversation.abort_stream();
        return Err(CliError::Status(status.as_u16()));
    }
    let skipped = consume(response.bytes_stream(), conversation, out).await?;
    if skipped > 0 {
        tracing::info!(skipped, "chat turn finished with skipped frames");
    }
    Ok(skipped)
}

/// Run a single prompt, or read prompts line by line from `input`.
///
/// # Errors
///
/// Stops at the first failed turn.
pub async fn run<R: BufRead, W: Write>(
    client: &reqwest::Client,
    base_url: &str,
    model: &str,
    prompt: Option<String>,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut conversation = Conversation::empty();
    if let Some(prompt) = prompt {
        run_turn(client, base_url, model, &mut conversation, &prompt, out).await?;
        return Ok(());
    }
    for line in input.lines() {
        let line = line?;
        run_turn(client, base_url, model, &mut conversation, &line, out).await?;
    }
    tracing::debug!(messages = conversation.messages().len(), "chat session ended");
    Ok(())
}

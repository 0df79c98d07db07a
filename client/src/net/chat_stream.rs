//! Streamed chat completions read straight from the response body.
//!
//! The browser's `ReadableStream` hands out byte chunks with arbitrary
//! boundaries; `frames::ChatStream` reassembles lines and the reducer
//! updates the last message in the shared `ChatState` after every chunk, so
//! text appears as it arrives.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures end the turn with a [`StreamError`]. Frames that fail
//! to decode are logged and counted, and the stream keeps going.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_stream_test.rs"]
mod chat_stream_test;

use frames::viewer::{CHAT_COMPLETIONS_PATH, endpoint};
use frames::{ChatRequest, ChatStream, FrameError, apply_chunk, finish_stream};
use leptos::prelude::*;

use crate::state::chat::ChatState;

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("chat request failed: {0}")]
    Status(u16),
    #[error("chat request error: {0}")]
    Transport(String),
    #[error("chat response has no body")]
    NoBody,
}

#[must_use]
pub fn completions_url(base: &str) -> String {
    endpoint(base, CHAT_COMPLETIONS_PATH)
}

/// Feed one body chunk into the conversation.
pub fn apply_bytes(stream: &mut ChatStream, state: &mut ChatState, bytes: &[u8]) -> Vec<FrameError> {
    let errors = apply_chunk(stream, &mut state.conversation, bytes);
    state.note_frame_errors(&errors);
    errors
}

/// Flush the decoder at end of body and clear the typing indicator.
pub fn finish_bytes(stream: &mut ChatStream, state: &mut ChatState) -> Vec<FrameError> {
    let errors = finish_stream(stream, &mut state.conversation);
    state.note_frame_errors(&errors);
    errors
}

#[cfg(feature = "hydrate")]
fn log_frame_errors(errors: &[FrameError]) {
    for error in errors {
        leptos::logging::warn!("skipping chat frame: {error}");
    }
}

/// POST `request` and stream the reply into `chat`.
///
/// # Errors
///
/// Returns [`StreamError`] when the request cannot be sent, the backend
/// answers with a non-OK status, or the body cannot be read.
pub async fn stream_chat(base: &str, request: &ChatRequest, chat: RwSignal<ChatState>) -> Result<(), StreamError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let transport = |e: gloo_net::Error| StreamError::Transport(e.to_string());
        let js_error = |e: JsValue| StreamError::Transport(format!("{e:?}"));

        let resp = gloo_net::http::Request::post(&completions_url(base))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(StreamError::Status(resp.status()));
        }
        let body = resp.body().ok_or(StreamError::NoBody)?;
        let reader: web_sys::ReadableStreamDefaultReader = body.get_reader().unchecked_into();

        let mut stream = ChatStream::new();
        while !stream.is_ended() {
            let result = JsFuture::from(reader.read()).await.map_err(js_error)?;
            let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
                .map_err(js_error)?
                .as_bool()
                .unwrap_or(true);
            if done {
                break;
            }
            let value = js_sys::Reflect::get(&result, &JsValue::from_str("value")).map_err(js_error)?;
            let bytes = js_sys::Uint8Array::new(&value).to_vec();
            let errors = chat
                .try_update(|state| apply_bytes(&mut stream, state, &bytes))
                .unwrap_or_default();
            log_frame_errors(&errors);
        }
        // `[DONE]` can arrive before the body closes; stop the download.
        if stream.is_ended() {
            if let Err(e) = JsFuture::from(reader.cancel()).await {
                leptos::logging::warn!("chat body cancel failed: {e:?}");
            }
        }
        let errors = chat
            .try_update(|state| finish_bytes(&mut stream, state))
            .unwrap_or_default();
        log_frame_errors(&errors);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request, chat);
        Err(StreamError::Transport("not available on server".to_owned()))
    }
}

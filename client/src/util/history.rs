//! Browser location hash access behind `cookbook::HistorySink`.
//!
//! Writes use `history.replaceState` so selecting documents never grows the
//! back stack; the no-op guard lives in `cookbook::sync_history`.

use cookbook::HistorySink;

/// The current `window.location`'s history entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl HistorySink for BrowserHistory {
    fn current_hash(&self) -> String {
        current_hash()
    }

    fn replace_hash(&mut self, hash: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash)) {
                leptos::logging::warn!("history.replaceState failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = hash;
        }
    }
}

/// `window.location.hash`, or empty outside the browser.
pub fn current_hash() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Scroll the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

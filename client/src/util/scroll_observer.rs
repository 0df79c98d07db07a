//! `IntersectionObserver` glue for the table of contents.
//!
//! The observer watches the rendered headings of the active document and,
//! on every callback, asks `cookbook::scroll` which heading to highlight.
//! Dropping the returned [`HeadingObserver`] disconnects it.

#[cfg(feature = "hydrate")]
use cookbook::scroll::{HeadingPosition, IntersectionSample, ROOT_MARGIN, THRESHOLDS, next_active, pick_active};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Live observer plus the JS callback it calls into.
pub struct HeadingObserver {
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for HeadingObserver {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
fn heading_positions(document: &web_sys::Document, slugs: &[String]) -> Vec<HeadingPosition> {
    slugs
        .iter()
        .filter_map(|slug| {
            let el = document.get_element_by_id(slug)?;
            Some(HeadingPosition { slug: slug.clone(), top: el.get_bounding_client_rect().top() })
        })
        .collect()
}

/// Observe the elements whose ids are `slugs`.
///
/// `current` reads the highlighted heading; `on_change` receives a new one
/// only when the pick differs from it.
pub fn observe_headings<C, F>(slugs: Vec<String>, current: C, on_change: F) -> Option<HeadingObserver>
where
    C: Fn() -> Option<String> + 'static,
    F: Fn(String) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let cb_document = document.clone();
        let cb_slugs = slugs.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let samples: Vec<IntersectionSample> = entries
                .iter()
                .map(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>())
                .map(|entry| IntersectionSample {
                    slug: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            let positions = heading_positions(&cb_document, &cb_slugs);
            let height = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let active = current();
            if let Some(next) = next_active(active.as_deref(), pick_active(&samples, &positions, height)) {
                on_change(next);
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        let thresholds: js_sys::Array = THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
        init.set_threshold(&thresholds);

        let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {e:?}");
                return None;
            }
        };
        for slug in &slugs {
            if let Some(el) = document.get_element_by_id(slug) {
                observer.observe(&el);
            }
        }
        Some(HeadingObserver { observer, _callback: callback })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slugs, current, on_change);
        None
    }
}

//! Rendered body of the active document.

use leptos::prelude::*;

use crate::state::cookbook::{CookbookState, NO_DOCUMENTS};

#[component]
pub fn MarkdownView() -> impl IntoView {
    let cookbook = expect_context::<RwSignal<CookbookState>>();

    // Re-render only when the document changes, not on heading moves.
    let doc_id = Memo::new(move |_| cookbook.with(|s| s.nav.doc_id().map(str::to_owned)));
    let html = Memo::new(move |_| {
        doc_id.track();
        cookbook.with_untracked(|s| s.active_doc().map(|doc| cookbook::render_body(&doc.content)))
    });

    move || match html.get() {
        Some(body) => view! { <article class="markdown-body" inner_html=body></article> }.into_any(),
        None => view! { <div class="cookbook__empty">{NO_DOCUMENTS}</div> }.into_any(),
    }
}

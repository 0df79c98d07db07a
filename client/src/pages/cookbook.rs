//! Cookbook viewer page: sidebar, rendered document, table of contents.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydrate the page fetches the corpus, resolves `location.hash` against
//! it and from then on keeps the hash, the language preference and the
//! active heading in step with `CookbookState`.

use cookbook::nav::SITE_TITLE;
use cookbook::sync_history;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    heading_toc::HeadingToc, language_switch::LanguageSwitch, markdown_view::MarkdownView, sidebar::Sidebar,
};
use crate::state::cookbook::{CookbookState, LoadStatus};
use crate::util::history::BrowserHistory;
use crate::util::language_pref::save_preference;

#[cfg(feature = "hydrate")]
use crate::net::api::fetch_docs;
#[cfg(feature = "hydrate")]
use crate::util::history::{current_hash, scroll_to_id, scroll_to_top};
#[cfg(feature = "hydrate")]
use crate::util::language_pref::read_preference;
#[cfg(feature = "hydrate")]
use crate::util::scroll_observer::{HeadingObserver, observe_headings};

#[cfg(feature = "hydrate")]
fn load_corpus(cookbook: RwSignal<CookbookState>) {
    leptos::task::spawn_local(async move {
        let loaded = fetch_docs()
            .await
            .and_then(|docs| cookbook::DocSet::from_docs(docs).map_err(|e| e.to_string()));
        match loaded {
            Ok(docs) => {
                let fragment = current_hash();
                let preferred = read_preference();
                log::info!("loaded {} documents", docs.len());
                cookbook.update(|s| s.load(docs, &fragment, preferred));
                if let Some(slug) = cookbook.with_untracked(|s| s.nav.heading().map(str::to_owned)) {
                    scroll_to_id(&slug);
                }
            }
            Err(e) => {
                leptos::logging::warn!("cookbook load failed: {e}");
                cookbook.update(|s| s.fail(e));
            }
        }
    });
}

/// Cookbook page at `/`.
#[component]
pub fn CookbookPage() -> impl IntoView {
    let cookbook = expect_context::<RwSignal<CookbookState>>();

    #[cfg(feature = "hydrate")]
    {
        if cookbook.with_untracked(|s| s.status != LoadStatus::Ready) {
            load_corpus(cookbook);
        }

        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            let fragment = current_hash();
            cookbook.update(|s| {
                s.apply_fragment(&fragment);
            });
        });
        on_cleanup(move || handle.remove());

        // Recreate the observer only when the heading set changes.
        let slugs = Memo::new(move |_| {
            cookbook.with(|s| s.active_headings().into_iter().map(|h| h.slug).collect::<Vec<_>>())
        });
        // A new document without a target heading starts at the top.
        let doc_id = Memo::new(move |_| cookbook.with(|s| s.nav.doc_id().map(str::to_owned)));
        Effect::new(move |prev: Option<Option<String>>| {
            let current = doc_id.get();
            let moved = prev.is_some_and(|prev| prev != current);
            if moved && cookbook.with_untracked(|s| s.nav.heading().is_none()) {
                scroll_to_top();
            }
            current
        });

        let observer = StoredValue::new_local(None::<HeadingObserver>);
        Effect::new(move || {
            let slugs = slugs.get();
            let handle = observe_headings(
                slugs,
                move || cookbook.with_untracked(|s| s.nav.heading().map(str::to_owned)),
                move |slug| {
                    cookbook.update(|s| {
                        s.navigate_heading(&slug);
                    });
                },
            );
            observer.set_value(handle);
        });
    }

    Effect::new(move || {
        if let Some(fragment) = cookbook.with(CookbookState::fragment) {
            sync_history(&mut BrowserHistory, &fragment);
        }
    });

    Effect::new(move || {
        let (ready, language) = cookbook.with(|s| (s.status == LoadStatus::Ready, s.nav.language()));
        if ready {
            save_preference(language);
        }
    });

    let title = move || cookbook.with(CookbookState::title);

    view! {
        <Title text=title/>
        <div class="cookbook">
            <header class="cookbook__header">
                <h1 class="cookbook__brand">{SITE_TITLE}</h1>
                <div class="cookbook__active-title">{move || cookbook.with(|s| s.active_title().to_owned())}</div>
                <LanguageSwitch/>
                <a class="cookbook__chat-link" href="/chat">"Assistant"</a>
            </header>
            {move || match cookbook.with(|s| s.status.clone()) {
                LoadStatus::Loading => view! { <div class="cookbook__status">"Loading..."</div> }.into_any(),
                LoadStatus::Failed(message) => {
                    view! { <div class="cookbook__status cookbook__status--error">{message}</div> }.into_any()
                }
                LoadStatus::Ready => {
                    view! {
                        <div class="cookbook__layout">
                            <Sidebar/>
                            <MarkdownView/>
                            <HeadingToc/>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

//! Table of contents for the active document.

use cookbook::encode_fragment;
use leptos::prelude::*;

use crate::state::cookbook::CookbookState;
use crate::util::history::scroll_to_id;

/// Heading list; the active heading follows scrolling and clicks.
#[component]
pub fn HeadingToc() -> impl IntoView {
    let cookbook = expect_context::<RwSignal<CookbookState>>();

    let entries = move || {
        cookbook.with(|s| {
            let Some(doc) = s.active_doc() else {
                return Vec::new();
            };
            doc.headings
                .iter()
                .map(|h| {
                    let href = encode_fragment(doc.language, doc.stem(), Some(&h.slug));
                    (h.clone(), href)
                })
                .collect::<Vec<_>>()
        })
    };
    let active = move || cookbook.with(|s| s.nav.heading().map(str::to_owned));

    view! {
        <aside class="cookbook-toc">
            <ul class="cookbook-toc__list">
                {move || {
                    let active = active();
                    entries()
                        .into_iter()
                        .map(|(heading, href)| {
                            let is_active = active.as_deref() == Some(heading.slug.as_str());
                            let slug = heading.slug.clone();
                            view! {
                                <li
                                    class=format!("cookbook-toc__item cookbook-toc__item--depth-{}", heading.depth)
                                    class:cookbook-toc__item--active=is_active
                                >
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            cookbook.update(|s| {
                                                s.navigate_heading(&slug);
                                            });
                                            scroll_to_id(&slug);
                                        }
                                    >
                                        {heading.text}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </aside>
    }
}

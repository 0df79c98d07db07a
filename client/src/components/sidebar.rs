//! Document list with a title search box.

use leptos::prelude::*;

use crate::state::cookbook::{CookbookState, NO_MATCHES};

/// Sidebar listing the current language's documents.
#[component]
pub fn Sidebar() -> impl IntoView {
    let cookbook = expect_context::<RwSignal<CookbookState>>();

    let items = move || cookbook.with(CookbookState::sidebar);
    let active_id = move || cookbook.with(|s| s.nav.doc_id().map(str::to_owned));

    view! {
        <nav class="cookbook-sidebar">
            <input
                class="cookbook-sidebar__search"
                type="search"
                placeholder="Search..."
                prop:value=move || cookbook.with(|s| s.query.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    cookbook.update(|s| s.query = value);
                }
            />
            <ul class="cookbook-sidebar__list">
                {move || {
                    let active = active_id();
                    let items = items();
                    if items.is_empty() {
                        return view! { <li class="cookbook-sidebar__empty">{NO_MATCHES}</li> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|item| {
                            let is_active = active.as_deref() == Some(item.id.as_str());
                            let id = item.id.clone();
                            view! {
                                <li
                                    class="cookbook-sidebar__item"
                                    class:cookbook-sidebar__item--active=is_active
                                    on:click=move |_| {
                                        cookbook.update(|s| {
                                            s.select_doc(&id);
                                        });
                                    }
                                >
                                    {item.title}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </nav>
    }
}

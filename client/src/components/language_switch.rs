//! `zh` / `en` toggle.

use cookbook::Language;
use leptos::prelude::*;

use crate::state::cookbook::CookbookState;

#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let cookbook = expect_context::<RwSignal<CookbookState>>();
    let current = move || cookbook.with(|s| s.nav.language());

    view! {
        <div class="language-switch">
            {Language::ALL
                .into_iter()
                .map(|language| {
                    view! {
                        <button
                            class="btn language-switch__option"
                            class:language-switch__option--active=move || current() == language
                            on:click=move |_| {
                                cookbook.update(|s| {
                                    s.switch_language(language);
                                });
                            }
                        >
                            {language.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

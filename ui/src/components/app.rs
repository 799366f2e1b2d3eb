use dioxus::prelude::*;

use atm_common::lang::Language;

use super::account_panel::AccountPanel;
use super::atm_state::AtmState;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AtmState::new()));
    let mut language = use_context_provider(|| Signal::new(Language::default()));

    let current = *language.read();
    let bundle = current.bundle();
    let background = current.background_color();

    rsx! {
        main {
            class: "container",
            style: "text-align: center; background-color: {background};",
            header {
                h1 { "{bundle.welcome_message}" }
                div { class: "language-selector",
                    for lang in Language::all() {
                        button {
                            key: "{lang.code()}",
                            onclick: move |_| language.set(*lang),
                            "{lang.label()}"
                        }
                    }
                }
            }
            AccountPanel {}
        }
    }
}

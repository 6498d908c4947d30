use crate::i18n;
use dioxus::prelude::*;

/// The bottom navigation bar. Sign-out is delegated to the host app via
/// `on_logout`; nothing here knows what logging out means.
#[component]
pub fn NavBar(on_logout: EventHandler<()>) -> Element {
    rsx! {
        nav {
            class: "bottom-nav",
            ul {
                li { strong { {i18n::t("rewards.title")} } }
            }
            ul {
                li {
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_logout.call(());
                        },
                        {i18n::t("common.logout")}
                    }
                }
            }
        }
    }
}

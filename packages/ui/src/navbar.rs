use dioxus::prelude::*;

use crate::{LogoutButton, ThemeToggle};

/// Top bar: brand, the links passed as children, theme toggle and logout.
#[component]
pub fn Navbar(
    #[props(default = "UMS Admin".to_string())] brand: String,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-actions",
                ThemeToggle {}
                LogoutButton {
                    class: "btn btn-outline navbar-logout",
                    on_logout: on_logout,
                }
            }
        }
    }
}

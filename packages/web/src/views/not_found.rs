use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { class: "view-muted", "Nothing lives at /{path}." }
            Link { to: Route::Root {}, "Go home" }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn AlertBanner(class: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { class: "alert-message", {children} }
            button {
                class: "alert-close",
                r#type: "button",
                title: "Dismiss",
                onclick: move |_| on_close.call(()),
                "\u{00D7}"
            }
        }
    }
}

#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-container",
            span { class: "spinner" }
            if !label.is_empty() {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}

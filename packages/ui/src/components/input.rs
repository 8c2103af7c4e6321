use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: html_for, {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] readonly: bool,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            id: id,
            class: "form-input {class}",
            r#type: input_type,
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            readonly: readonly,
            required: required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// `<select>` over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] id: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] class: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: id,
            class: "form-select {class}",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}

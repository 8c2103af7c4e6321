use std::time::Duration;

use api::models::validate_new_password;
use dioxus::prelude::*;

use crate::admin_store::use_admin_store;
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::notice::{use_notice, NoticeBanner};
use crate::timer::sleep;

const VIEWS_CSS: Asset = asset!("/assets/views.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Request,
    Reset,
}

/// Two-step password recovery: request a code, then submit it with a new
/// password.
#[component]
pub fn PasswordResetView(on_done: EventHandler<()>, on_cancel: Option<EventHandler<()>>) -> Element {
    let store = use_admin_store();
    let notice = use_notice();
    let mut step = use_signal(|| Step::Request);
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let request_code = move |evt: FormEvent| async move {
        evt.prevent_default();
        if email().trim().is_empty() {
            notice.error("Please enter your email address");
            return;
        }
        busy.set(true);
        match store.client().forgot_password(&email()).await {
            Ok(reply) => {
                notice.success(
                    reply
                        .message
                        .unwrap_or_else(|| "Reset code sent to your email".to_string()),
                );
                step.set(Step::Reset);
            }
            Err(err) => notice.error(err.to_string()),
        }
        busy.set(false);
    };

    let reset = move |evt: FormEvent| async move {
        evt.prevent_default();
        if code().trim().is_empty() {
            notice.error("Please enter the reset code");
            return;
        }
        if let Err(message) = validate_new_password(&new_password(), &confirm_password()) {
            notice.error(message);
            return;
        }
        busy.set(true);
        let result = store
            .client()
            .reset_password(&email(), &code(), &new_password())
            .await;
        busy.set(false);
        match result {
            Ok(_) => {
                notice.success("Password reset successful. You can sign in now.");
                sleep(Duration::from_secs(1)).await;
                on_done.call(());
            }
            Err(err) => notice.error(err.to_string()),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Reset Password" }

                NoticeBanner { notice }

                if step() == Step::Request {
                    p { class: "view-muted", "Enter your account email and we will send you a reset code." }
                    form {
                        class: "auth-form",
                        onsubmit: request_code,
                        div {
                            class: "form-group",
                            Label { html_for: "reset-email", "Email address" }
                            Input {
                                id: "reset-email",
                                r#type: "email",
                                value: email(),
                                placeholder: "Enter your email address",
                                required: true,
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "w-full",
                            disabled: busy(),
                            if busy() { "Sending..." } else { "Send Reset Code" }
                        }
                    }
                } else {
                    p { class: "view-muted", "Check your inbox for the code sent to {email}." }
                    form {
                        class: "auth-form",
                        onsubmit: reset,
                        div {
                            class: "form-group",
                            Label { html_for: "reset-code", "Reset code" }
                            Input {
                                id: "reset-code",
                                value: code(),
                                placeholder: "Enter the code",
                                required: true,
                                oninput: move |evt: FormEvent| code.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "reset-new-password", "New Password" }
                            Input {
                                id: "reset-new-password",
                                r#type: "password",
                                value: new_password(),
                                placeholder: "Enter new password",
                                required: true,
                                oninput: move |evt: FormEvent| new_password.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "reset-confirm-password", "Confirm Password" }
                            Input {
                                id: "reset-confirm-password",
                                r#type: "password",
                                value: confirm_password(),
                                placeholder: "Confirm new password",
                                required: true,
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "w-full",
                            disabled: busy(),
                            if busy() { "Resetting..." } else { "Reset Password" }
                        }
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| step.set(Step::Request),
                            "Send a new code"
                        }
                    }
                }

                if let Some(handler) = on_cancel {
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| handler.call(()),
                        "Back to sign in"
                    }
                }
            }
        }
    }
}

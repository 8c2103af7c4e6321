use std::time::Duration;

use api::mock::{DEMO_EMAIL, DEMO_PASSWORD};
use dioxus::prelude::*;

use crate::admin_store::use_admin_store;
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::notice::{use_notice, NoticeBanner};
use crate::timer::sleep;

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// Email/password sign-in form.
///
/// On success a notice is shown and `on_login` fires one second later so
/// the user sees it before the route changes.
#[component]
pub fn LoginView(
    on_login: EventHandler<()>,
    on_forgot_password: Option<EventHandler<()>>,
) -> Element {
    let store = use_admin_store();
    let notice = use_notice();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            notice.error("Please enter your email and password");
            return;
        }

        submitting.set(true);
        let result = store.login(&email(), &password()).await;
        submitting.set(false);

        match result {
            Ok(_) => {
                notice.success("Login successful!");
                sleep(Duration::from_secs(1)).await;
                on_login.call(());
            }
            Err(err) => notice.error(err.to_string()),
        }
    };

    let (password_type, toggle_title) = if show_password() {
        ("text".to_string(), "Hide password".to_string())
    } else {
        ("password".to_string(), "Show password".to_string())
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Welcome Back" }
                p { class: "view-muted", "Sign in to the user management console" }

                NoticeBanner { notice }

                if store.mock_enabled() {
                    Button {
                        variant: ButtonVariant::Link,
                        class: "demo-fill",
                        onclick: move |_| {
                            email.set(DEMO_EMAIL.to_string());
                            password.set(DEMO_PASSWORD.to_string());
                        },
                        "Use demo credentials"
                    }
                }

                form {
                    class: "auth-form",
                    onsubmit: onsubmit,

                    div {
                        class: "form-group",
                        Label { html_for: "login-email", "Email address" }
                        Input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "Enter your email address",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "login-password", "Password" }
                        div {
                            class: "password-field",
                            Input {
                                id: "login-password",
                                r#type: password_type,
                                placeholder: "Enter your password",
                                value: password(),
                                required: true,
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                class: "password-toggle",
                                title: toggle_title,
                                onclick: move |_| show_password.toggle(),
                                if show_password() { "Hide" } else { "Show" }
                            }
                        }
                    }

                    Button {
                        button_type: "submit",
                        class: "w-full",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }

                if let Some(handler) = on_forgot_password {
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| handler.call(()),
                        "Forgot your password?"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use ui::views::{LoginView, PasswordResetView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let signed_in = ui::use_signed_in_at_mount();
    let nav = use_navigator();

    if signed_in {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        LoginView {
            on_login: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_forgot_password: move |_| {
                nav.push(Route::ForgotPassword {});
            },
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();

    rsx! {
        PasswordResetView {
            on_done: move |_| {
                nav.replace(Route::Login {});
            },
            on_cancel: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

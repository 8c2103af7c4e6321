use dioxus::prelude::*;
use ui::views::PasswordResetView;

use crate::Route;

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

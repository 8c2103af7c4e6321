use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let signed_in = ui::use_signed_in_at_mount();
    let nav = use_navigator();

    // Already signed in (e.g. a persisted session): straight to the dashboard.
    // A fresh login navigates through `on_login` once its notice has shown.
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

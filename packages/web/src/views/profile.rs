use dioxus::prelude::*;
use ui::views::UserProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        UserProfileView {
            on_account_deleted: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

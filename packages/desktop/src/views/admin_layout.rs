use dioxus::prelude::*;
use ui::views::{AdminDashboardView, UserProfileView};
use ui::Navbar;

use crate::Route;

#[component]
pub fn AdminLayout() -> Element {
    let authenticated = ui::use_authenticated();
    let nav = use_navigator();

    if !authenticated {
        tracing::info!("No session, redirecting to login");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Link { to: Route::Dashboard {}, active_class: "active", "Dashboard" }
            Link { to: Route::Profile {}, active_class: "active", "Profile" }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AdminDashboardView {}
    }
}

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

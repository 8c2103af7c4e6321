use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Guarded shell for the signed-in pages. Losing the session (logout, a 401
/// anywhere, account deletion) re-renders this layout, which then sends the
/// user to the login page.
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

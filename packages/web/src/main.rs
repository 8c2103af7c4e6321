use dioxus::prelude::*;

use views::{AdminLayout, Dashboard, ForgotPassword, Login, NotFound, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[layout(AdminLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Logger already initialised: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::AdminStoreProvider {
            ui::ThemeProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` based on auth state
#[component]
fn Root() -> Element {
    let authenticated = ui::use_authenticated();
    let nav = use_navigator();

    if authenticated {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            "/no/such/page".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["no".into(), "such".into(), "page".into()],
            })
        );
        assert_eq!("/profile".parse::<Route>().ok(), Some(Route::Profile {}));
    }
}

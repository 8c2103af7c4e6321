//! Theme context.
//!
//! The selected [`Theme`] is loaded from the platform store on startup
//! (`dark` when nothing or something unknown is stored), written back on
//! every change and applied to the document root as both a class and a
//! `data-theme` attribute, which is what `themes.css` keys on.

use dioxus::prelude::*;
use store::Theme;

use crate::client::make_store;
use crate::icons::{FaMoon, FaSun};
use crate::Icon;

const THEMES_CSS: Asset = asset!("/assets/themes.css");

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    theme: Signal<Theme>,
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

impl ThemeContext {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn set(&self, theme: Theme) {
        let mut signal = self.theme;
        signal.set(theme);
        theme.save(&make_store());
        tracing::debug!("Theme set to {}", theme);
    }

    /// Light goes dark, everything else goes light.
    pub fn toggle(&self) {
        let next = self.theme.peek().toggled();
        self.set(next);
    }
}

/// JavaScript that swaps the root class and `data-theme` to `theme`.
pub fn theme_script(theme: Theme) -> String {
    let all = Theme::ALL
        .iter()
        .map(|t| format!("\"{}\"", t.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let name = theme.as_str();
    format!(
        r#"(function() {{
    var root = document.documentElement;
    root.classList.remove({all});
    root.classList.add("{name}");
    root.setAttribute("data-theme", "{name}");
}})();"#
    )
}

pub fn apply_theme(theme: Theme) {
    document::eval(&theme_script(theme));
}

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_signal(|| Theme::load(&make_store()));

    use_effect(move || apply_theme(theme()));

    use_context_provider(|| ThemeContext { theme });

    rsx! {
        document::Link { rel: "stylesheet", href: THEMES_CSS }
        {children}
    }
}

#[component]
pub fn ThemeToggle(#[props(default = "".to_string())] class: String) -> Element {
    let theme = use_theme();
    let current = theme.current();
    let title = format!("Switch to {}", current.toggled().label());

    rsx! {
        button {
            class: "theme-toggle {class}",
            title: "{title}",
            onclick: move |_| theme.toggle(),
            if current.is_dark() {
                Icon { icon: FaSun, width: 14, height: 14 }
            } else {
                Icon { icon: FaMoon, width: 14, height: 14 }
            }
        }
    }
}

/// Card grid with every theme; the active one is highlighted.
#[component]
pub fn ThemeSelector() -> Element {
    let theme = use_theme();
    let current = theme.current();

    rsx! {
        div {
            class: "theme-grid",
            for option in Theme::ALL {
                button {
                    key: "{option.as_str()}",
                    class: if option == current { "theme-card theme-card-active" } else { "theme-card" },
                    "data-theme": "{option.as_str()}",
                    onclick: move |_| theme.set(option),
                    span { class: "theme-swatch" }
                    span { class: "theme-card-label", "{option.label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_sets_class_and_attribute() {
        let js = theme_script(Theme::Blue);
        assert!(js.contains(r#"root.classList.add("blue");"#));
        assert!(js.contains(r#"root.setAttribute("data-theme", "blue");"#));
        for theme in Theme::ALL {
            assert!(js.contains(&format!("\"{}\"", theme.as_str())));
        }
    }
}

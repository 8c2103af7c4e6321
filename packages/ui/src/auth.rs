//! Authentication hooks for the UI.

use dioxus::prelude::*;

use crate::admin_store::use_admin_store;

/// Whether the store currently holds a session. Subscribes the caller.
pub fn use_authenticated() -> bool {
    use_admin_store().is_authenticated()
}

/// Whether a session existed when the calling component mounted. A login
/// that completes later leaves this `false`, so screens can tell a
/// persisted session apart from one they just created.
pub fn use_signed_in_at_mount() -> bool {
    let store = use_admin_store();
    use_hook(|| store.peek_authenticated())
}

/// Button to log out the current user. Always succeeds locally; `on_logout`
/// fires once the session is gone.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let store = use_admin_store();
    let mut busy = use_signal(|| false);

    let onclick = move |_| async move {
        busy.set(true);
        store.logout().await;
        busy.set(false);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use store::AdminConfig;

    use super::*;
    use crate::admin_store::AdminStore;
    use crate::state::{Action, Outcome};

    thread_local! {
        static SEEN: RefCell<Vec<(bool, bool)>> = const { RefCell::new(Vec::new()) };
    }

    fn app() -> Element {
        let store = use_context_provider(|| {
            let store = AdminStore::new(AdminConfig::default());
            store.dispatch(Action::SessionExpired);
            store
        });
        let at_mount = use_signed_in_at_mount();
        use_hook(|| store.dispatch(Action::Fulfilled(Outcome::LoggedIn("token-1".into()))));
        SEEN.with(|seen| seen.borrow_mut().push((at_mount, store.peek_authenticated())));
        rsx! {}
    }

    #[test]
    fn test_login_after_mount_is_not_a_persisted_session() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen, vec![(false, true), (false, true)]);
    }
}

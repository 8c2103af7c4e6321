//! Self-service account page: profile, password, theme, account deletion.

use api::models::validate_new_password;
use api::{Profile, UserUpdate};
use dioxus::prelude::*;

use crate::admin_store::use_admin_store;
use crate::components::{Button, ButtonVariant, Input, Label, Modal, Spinner};
use crate::notice::{use_notice, NoticeBanner};
use crate::state::{Action, Outcome};
use crate::ThemeSelector;

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// The delete-account dialog only arms once the user has typed their email.
pub fn deletion_confirmed(typed: &str, email: &str) -> bool {
    let typed = typed.trim();
    !typed.is_empty() && typed.eq_ignore_ascii_case(email.trim())
}

#[component]
pub fn UserProfileView(on_account_deleted: EventHandler<()>) -> Element {
    let store = use_admin_store();
    let notice = use_notice();

    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut loading = use_signal(|| true);
    let mut editing = use_signal(|| false);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);

    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut busy = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut delete_confirm = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let client = store.client();
        match store.observe(client.get_profile().await) {
            Ok(p) => {
                first_name.set(p.first_name.clone());
                last_name.set(p.last_name.clone());
                profile.set(Some(p));
            }
            Err(err) => {
                tracing::warn!("Failed to fetch profile: {err}");
                notice.error("Failed to fetch profile");
            }
        }
        loading.set(false);
    });

    let save_profile = move |_| async move {
        busy.set(true);
        let update = UserUpdate {
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
        };
        let client = store.client();
        match store.observe(client.update_profile(&update).await) {
            Ok(_) => {
                if let Some(p) = profile.write().as_mut() {
                    p.first_name = update.first_name.clone();
                    p.last_name = update.last_name.clone();
                }
                editing.set(false);
                notice.success("Profile updated successfully");
            }
            Err(err) => {
                tracing::warn!("Failed to update profile: {err}");
                notice.error("Failed to update profile");
            }
        }
        busy.set(false);
    };

    let cancel_edit = move |_| {
        if let Some(p) = profile.peek().as_ref() {
            first_name.set(p.first_name.clone());
            last_name.set(p.last_name.clone());
        }
        editing.set(false);
    };

    let change_password = move |evt: FormEvent| async move {
        evt.prevent_default();
        if let Err(message) = validate_new_password(&new_password(), &confirm_password()) {
            notice.error(message);
            return;
        }
        busy.set(true);
        let client = store.client();
        match store.observe(client.change_password(&old_password(), &new_password()).await) {
            Ok(_) => {
                old_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
                notice.success("Password changed successfully");
            }
            Err(err) => {
                tracing::warn!("Failed to change password: {err}");
                notice.error("Failed to change password");
            }
        }
        busy.set(false);
    };

    let delete_account = move |_| async move {
        busy.set(true);
        let client = store.client();
        match store.observe(client.delete_account().await) {
            Ok(_) => {
                show_delete.set(false);
                busy.set(false);
                notice.success("Account deleted successfully");
                store.dispatch(Action::Fulfilled(Outcome::LoggedOut));
                on_account_deleted.call(());
            }
            Err(err) => {
                tracing::warn!("Failed to delete account: {err}");
                notice.error("Failed to delete account");
                busy.set(false);
            }
        }
    };

    if loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            Spinner { label: "Loading profile..." }
        };
    }

    let current = profile().unwrap_or_default();
    let email = current.email.clone();
    let armed = deletion_confirmed(&delete_confirm(), &email);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page profile-page",

            NoticeBanner { notice }

            div {
                class: "card profile-header",
                div { class: "avatar", "{current.initials()}" }
                div {
                    h4 { "{current.display_name()}" }
                    p { class: "view-muted", "{email}" }
                    if let Some(role) = current.role {
                        span { class: "badge badge-primary", "{role}" }
                    }
                }
            }

            div {
                class: "card",
                div {
                    class: "card-header",
                    h5 { "Profile Information" }
                    if !editing() {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(true),
                            "Edit Profile"
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        Label { html_for: "profile-first-name", "First Name" }
                        Input {
                            id: "profile-first-name",
                            value: first_name(),
                            placeholder: "Enter first name",
                            disabled: !editing(),
                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "profile-last-name", "Last Name" }
                        Input {
                            id: "profile-last-name",
                            value: last_name(),
                            placeholder: "Enter last name",
                            disabled: !editing(),
                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-group",
                    Label { html_for: "profile-email", "Email" }
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        value: email.clone(),
                        readonly: true,
                        disabled: true,
                    }
                }
                if editing() {
                    div {
                        class: "form-actions",
                        Button {
                            disabled: busy(),
                            onclick: save_profile,
                            if busy() { "Saving..." } else { "Save Changes" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: cancel_edit,
                            "Cancel"
                        }
                    }
                }
            }

            div {
                class: "card",
                div { class: "card-header", h5 { "Change Password" } }
                form {
                    onsubmit: change_password,
                    div {
                        class: "form-group",
                        Label { html_for: "old-password", "Current Password" }
                        Input {
                            id: "old-password",
                            r#type: "password",
                            value: old_password(),
                            placeholder: "Enter current password",
                            required: true,
                            oninput: move |evt: FormEvent| old_password.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            Label { html_for: "new-password", "New Password" }
                            Input {
                                id: "new-password",
                                r#type: "password",
                                value: new_password(),
                                placeholder: "Enter new password",
                                required: true,
                                oninput: move |evt: FormEvent| new_password.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "confirm-password", "Confirm Password" }
                            Input {
                                id: "confirm-password",
                                r#type: "password",
                                value: confirm_password(),
                                placeholder: "Confirm new password",
                                required: true,
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                        }
                    }
                    Button {
                        button_type: "submit",
                        disabled: busy(),
                        "Change Password"
                    }
                }
            }

            div {
                class: "card",
                div { class: "card-header", h5 { "Theme" } }
                ThemeSelector {}
            }

            div {
                class: "card danger-zone",
                div { class: "card-header", h5 { "Danger Zone" } }
                p { class: "view-muted", "Once you delete your account, there is no going back. Please be certain." }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        delete_confirm.set(String::new());
                        show_delete.set(true);
                    },
                    "Delete Account"
                }
            }

            if show_delete() {
                Modal {
                    title: "Delete Account",
                    on_close: move |_| show_delete.set(false),
                    p { "This permanently deletes your account and signs you out." }
                    p {
                        "Type "
                        strong { "{email}" }
                        " to confirm."
                    }
                    Input {
                        id: "delete-confirm",
                        value: delete_confirm(),
                        placeholder: "{email}",
                        oninput: move |evt: FormEvent| delete_confirm.set(evt.value()),
                    }
                    div {
                        class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| show_delete.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            disabled: !armed || busy(),
                            onclick: delete_account,
                            if busy() { "Deleting..." } else { "Delete Account" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_confirmation() {
        assert!(deletion_confirmed("admin@example.com", "admin@example.com"));
        assert!(deletion_confirmed("  Admin@Example.com ", "admin@example.com"));
        assert!(!deletion_confirmed("admin@example", "admin@example.com"));
        assert!(!deletion_confirmed("", ""));
    }
}

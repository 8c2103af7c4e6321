//! Dialogs opened from the dashboard's row actions.

use api::{Role, User, UserUpdate};
use dioxus::prelude::*;
use store::RoleSet;

use crate::components::{Button, ButtonVariant, Input, Label, Modal, Select};

#[component]
pub fn EditUserModal(
    user: User,
    busy: bool,
    on_save: EventHandler<UserUpdate>,
    on_close: EventHandler<()>,
) -> Element {
    let mut first_name = use_signal(|| user.first_name.clone());
    let mut last_name = use_signal(|| user.last_name.clone());

    rsx! {
        Modal {
            title: "Edit User",
            on_close: on_close,
            div {
                class: "form-group",
                Label { html_for: "edit-first-name", "First Name" }
                Input {
                    id: "edit-first-name",
                    value: first_name(),
                    placeholder: "Enter first name",
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
            }
            div {
                class: "form-group",
                Label { html_for: "edit-last-name", "Last Name" }
                Input {
                    id: "edit-last-name",
                    value: last_name(),
                    placeholder: "Enter last name",
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
            }
            div {
                class: "modal-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    disabled: busy,
                    onclick: move |_| on_save.call(UserUpdate {
                        first_name: first_name().trim().to_string(),
                        last_name: last_name().trim().to_string(),
                    }),
                    if busy { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

#[component]
pub fn RoleModal(
    user: User,
    roles: RoleSet,
    busy: bool,
    on_save: EventHandler<Role>,
    on_close: EventHandler<()>,
) -> Element {
    let mut role = use_signal(|| user.role);
    let options: Vec<(String, String)> = Role::choices(roles)
        .iter()
        .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
        .collect();

    rsx! {
        Modal {
            title: "Change User Role",
            on_close: on_close,
            p { "Change role for " strong { "{user.full_name()}" } }
            div {
                class: "form-group",
                Label { html_for: "role-select", "Select New Role" }
                Select {
                    id: "role-select",
                    value: role().as_str().to_string(),
                    options: options,
                    onchange: move |value: String| {
                        if let Ok(parsed) = value.parse::<Role>() {
                            role.set(parsed);
                        }
                    },
                }
            }
            div {
                class: "modal-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    disabled: busy,
                    onclick: move |_| on_save.call(role()),
                    if busy { "Updating..." } else { "Update Role" }
                }
            }
        }
    }
}

#[component]
pub fn DeleteUserModal(
    user: User,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title: "Confirm Delete",
            on_close: on_close,
            p {
                "Are you sure you want to delete "
                strong { "{user.full_name()}" }
                "? This action cannot be undone."
            }
            div {
                class: "modal-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Deleting..." } else { "Delete User" }
                }
            }
        }
    }
}

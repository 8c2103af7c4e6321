//! User management dashboard.
//!
//! The role/status selects feed the server-side filter and re-load the list
//! whenever they change; the search box filters the loaded list locally.
//! Every mutation re-fetches the list with the current filter before the
//! success notice is shown.

use api::{ApiMessage, ApiResult, Role, User, UserFilter, UserId, UserUpdate};
use dioxus::prelude::*;

use super::user_modals::{DeleteUserModal, EditUserModal, RoleModal};
use crate::admin_store::{use_admin_store, AdminStore};
use crate::components::{Button, ButtonVariant, Input, Select, Spinner};
use crate::filter::{
    created_label, or_na, role_badge_class, role_plural, search_users, server_filter,
    status_badge_class, StatusFilter, UserStats,
};
use crate::icons::{FaPen, FaTrashCan};
use crate::notice::{use_notice, NoticeBanner, NoticeHandle};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// A change requested from the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Update(UserId, UserUpdate),
    SetRole(UserId, Role),
    Delete(UserId),
    Suspend(UserId),
    Activate(UserId),
    ActivateAll,
}

impl Mutation {
    pub fn success_message(&self) -> &'static str {
        match self {
            Mutation::Update(..) => "User updated successfully",
            Mutation::SetRole(..) => "User role updated successfully",
            Mutation::Delete(_) => "User deleted successfully",
            Mutation::Suspend(_) => "User suspended successfully",
            Mutation::Activate(_) => "User activated successfully",
            Mutation::ActivateAll => "All users activated successfully",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::Update(..) => "Failed to update user",
            Mutation::SetRole(..) => "Failed to update user role",
            Mutation::Delete(_) => "Failed to delete user",
            Mutation::Suspend(_) => "Failed to suspend user",
            Mutation::Activate(_) => "Failed to activate user",
            Mutation::ActivateAll => "Failed to activate all users",
        }
    }

    /// Mutations started from a dialog close it on success.
    pub fn from_modal(&self) -> bool {
        matches!(
            self,
            Mutation::Update(..) | Mutation::SetRole(..) | Mutation::Delete(_)
        )
    }

    async fn run(self, store: AdminStore) -> ApiResult<ApiMessage> {
        match self {
            Mutation::Update(id, update) => store.update_user(id, update).await,
            Mutation::SetRole(id, role) => store.set_user_role(id, role).await,
            Mutation::Delete(id) => store.delete_user(id).await,
            Mutation::Suspend(id) => store.suspend_user(id).await,
            Mutation::Activate(id) => store.activate_user(id).await,
            Mutation::ActivateAll => store.activate_all_users().await,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Edit(User),
    Role(User),
    Delete(User),
}

async fn reload(store: AdminStore, notice: NoticeHandle, filter: UserFilter) {
    if store.fetch_users(&filter).await.is_err() {
        notice.error("Failed to fetch users");
    }
}

#[component]
pub fn AdminDashboardView() -> Element {
    let store = use_admin_store();
    let config = store.config();
    let roles = config.ui.roles;
    let page_size = config.api.page_size;
    let notice = use_notice();

    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(|| Option::<Role>::None);
    let mut status_filter = use_signal(StatusFilter::default);
    let mut dialog = use_signal(|| Option::<Dialog>::None);

    // Re-runs whenever either select changes.
    let mut loader = use_resource(move || async move {
        let filter = server_filter(role_filter(), status_filter(), page_size);
        reload(store, notice, filter).await;
    });

    let mutate = move |mutation: Mutation| {
        spawn(async move {
            let success = mutation.success_message();
            let failure = mutation.failure_message();
            let closes_dialog = mutation.from_modal();

            match mutation.run(store).await {
                Ok(_) => {
                    let filter =
                        server_filter(*role_filter.peek(), *status_filter.peek(), page_size);
                    reload(store, notice, filter).await;
                    if closes_dialog {
                        dialog.set(None);
                    }
                    notice.success(success);
                }
                Err(err) => {
                    tracing::warn!("{failure}: {err}");
                    notice.error(failure);
                }
            }
        });
    };

    let users = store.users();
    // Every store action flips this, so it also covers in-flight mutations.
    let busy = store.loading();
    let stats = UserStats::compute(&users, roles);
    let visible = search_users(&users, &search());

    let mut role_options = vec![(String::new(), "All Roles".to_string())];
    role_options.extend(
        Role::choices(roles)
            .iter()
            .map(|r| (r.as_str().to_string(), r.as_str().to_string())),
    );
    let status_options = vec![
        (StatusFilter::All.as_value().to_string(), "All Status".to_string()),
        (StatusFilter::Active.as_value().to_string(), "Active".to_string()),
        (StatusFilter::Inactive.as_value().to_string(), "Inactive".to_string()),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            NoticeBanner { notice }

            div {
                class: "dashboard-header",
                div {
                    h2 { class: "view-title", "User Management" }
                    p { class: "view-muted", "Manage users, roles, and permissions" }
                }
                div {
                    class: "dashboard-filters",
                    Input {
                        class: "search-input",
                        placeholder: "Search users...",
                        value: search(),
                        oninput: move |evt: FormEvent| search.set(evt.value()),
                    }
                    Select {
                        value: role_filter().map(|r| r.as_str().to_string()).unwrap_or_default(),
                        options: role_options,
                        onchange: move |value: String| role_filter.set(value.parse::<Role>().ok()),
                    }
                    Select {
                        value: status_filter().as_value().to_string(),
                        options: status_options,
                        onchange: move |value: String| status_filter.set(StatusFilter::from_value(&value)),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| loader.restart(),
                        "Refresh"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        disabled: busy,
                        onclick: move |_| mutate(Mutation::ActivateAll),
                        "Activate All"
                    }
                }
            }

            div {
                class: "stats-row",
                StatCard { value: stats.total, label: "Total Users" }
                StatCard { value: stats.active, label: "Active" }
                StatCard { value: stats.inactive, label: "Inactive" }
                for (role, count) in stats.per_role.clone() {
                    StatCard { key: "{role}", value: count, label: role_plural(role) }
                }
            }

            div {
                class: "card",
                div {
                    class: "card-header",
                    h5 { "Users List ({visible.len()})" }
                }
                if busy && users.is_empty() {
                    Spinner { label: "Loading users..." }
                } else if visible.is_empty() {
                    div {
                        class: "empty-state",
                        p { class: "view-muted", "No users found" }
                        if let Some(detail) = store.error() {
                            p { class: "view-muted error-detail", "{detail}" }
                        }
                    }
                } else {
                    table {
                        class: "user-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th { "Status" }
                                th { "Created" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for user in visible {
                                UserRow {
                                    key: "{user.id}",
                                    user: user.clone(),
                                    busy: busy,
                                    on_edit: move |u: User| dialog.set(Some(Dialog::Edit(u))),
                                    on_role: move |u: User| dialog.set(Some(Dialog::Role(u))),
                                    on_delete: move |u: User| dialog.set(Some(Dialog::Delete(u))),
                                    on_toggle_active: move |u: User| {
                                        if u.is_active {
                                            mutate(Mutation::Suspend(u.id));
                                        } else {
                                            mutate(Mutation::Activate(u.id));
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }

            {match dialog() {
                Some(Dialog::Edit(user)) => rsx! {
                    EditUserModal {
                        user: user.clone(),
                        busy: busy,
                        on_save: move |update: UserUpdate| mutate(Mutation::Update(user.id, update)),
                        on_close: move |_| dialog.set(None),
                    }
                },
                Some(Dialog::Role(user)) => rsx! {
                    RoleModal {
                        user: user.clone(),
                        roles: roles,
                        busy: busy,
                        on_save: move |role: Role| mutate(Mutation::SetRole(user.id, role)),
                        on_close: move |_| dialog.set(None),
                    }
                },
                Some(Dialog::Delete(user)) => rsx! {
                    DeleteUserModal {
                        user: user.clone(),
                        busy: busy,
                        on_confirm: move |_| mutate(Mutation::Delete(user.id)),
                        on_close: move |_| dialog.set(None),
                    }
                },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn StatCard(value: usize, label: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            h3 { "{value}" }
            p { "{label}" }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    busy: bool,
    on_edit: EventHandler<User>,
    on_role: EventHandler<User>,
    on_delete: EventHandler<User>,
    on_toggle_active: EventHandler<User>,
) -> Element {
    let name = user.full_name();
    let toggle_label = if user.is_active { "Suspend" } else { "Activate" };
    let edit_user = user.clone();
    let role_user = user.clone();
    let delete_user = user.clone();
    let toggle_user = user.clone();

    rsx! {
        tr {
            td { "{user.id}" }
            td { "{or_na(&name)}" }
            td { "{or_na(&user.email)}" }
            td { span { class: role_badge_class(user.role), "{user.role}" } }
            td {
                span {
                    class: status_badge_class(user.is_active),
                    if user.is_active { "Active" } else { "Inactive" }
                }
            }
            td { "{created_label(&user)}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Edit User",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Change Role",
                    onclick: move |_| on_role.call(role_user.clone()),
                    "Role"
                }
                Button {
                    variant: if user.is_active { ButtonVariant::Warning } else { ButtonVariant::Success },
                    disabled: busy,
                    onclick: move |_| on_toggle_active.call(toggle_user.clone()),
                    "{toggle_label}"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    title: "Delete User",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    "Delete"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use store::FormField;

use crate::actions;
use crate::components::Button;
use crate::icons::FaPlus;
use crate::{use_users, use_users_client, ErrorBanner, Icon, UserForm, UserTable, USERS_CSS};

/// The whole user list page: create button, form, error line and table.
///
/// Must be rendered inside a [`crate::UsersProvider`].
#[component]
pub fn UsersView() -> Element {
    let mut users = use_users();
    let client = use_users_client();
    let state = users();

    let submit_client = client.clone();
    let on_submit = move |_: ()| actions::submit(users, submit_client.clone());

    let on_delete = move |id: i64| actions::delete_user(users, client.clone(), id);

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "users-page",

            div {
                class: "btn-create",
                Button {
                    onclick: move |_| users.write().begin_create(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Create New User"
                }
            }

            if state.form.is_visible() {
                UserForm {
                    form: state.form.clone(),
                    on_input: move |(field, value): (FormField, String)| users.write().form.set(field, value),
                    on_submit: on_submit,
                    on_clear: move |_| users.write().clear(),
                }
            }

            if let Some(message) = state.error_message() {
                ErrorBanner { message: message }
            }

            UserTable {
                rows: state.rows(),
                on_edit: move |id: i64| {
                    users.write().begin_edit(id);
                },
                on_delete: on_delete,
            }
        }
    }
}

use dioxus::prelude::*;
use store::UserRow;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaTrash};
use crate::Icon;

/// Table of users with per-row Edit and Delete actions.
#[component]
pub fn UserTable(
    rows: Vec<UserRow>,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    rsx! {
        div {
            class: "table-wrapper",
            table {
                class: "user-table",
                thead {
                    tr {
                        th { "Sr.No" }
                        th { "Id" }
                        th { "First Name" }
                        th { "Last Name" }
                        th { "Email" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        UserTableRow {
                            key: "{row.id}",
                            row: row.clone(),
                            on_edit: on_edit,
                            on_delete: on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserTableRow(row: UserRow, on_edit: EventHandler<i64>, on_delete: EventHandler<i64>) -> Element {
    let id = row.id;

    rsx! {
        tr {
            td { "{row.serial}" }
            td { "{row.id}" }
            td { "{row.first_name}" }
            td { "{row.last_name}" }
            td { "{row.email}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_edit.call(id),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}

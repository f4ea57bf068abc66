use dioxus::prelude::*;
use guac_http::UserRecord;

/// Renders nothing until at least one user has been fetched.
#[component]
pub fn UserList(users: Vec<UserRecord>) -> Element {
    if users.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "record-list",
            h2 { "Users:" }
            ul {
                for (i, user) in users.iter().enumerate() {
                    li { key: "{i}", class: "user-item", "{user}" }
                }
            }
        }
    }
}

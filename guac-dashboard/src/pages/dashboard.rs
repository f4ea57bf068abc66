use dioxus::prelude::*;
use guac_http::{Action, ApiClient, ViewState};

use crate::widgets::connection_list::ConnectionList;
use crate::widgets::server_status::ServerStatus;
use crate::widgets::status_message::StatusMessage;
use crate::widgets::user_list::UserList;

/// The only page. Owns the view state and hands each widget its slice.
#[component]
pub fn Dashboard() -> Element {
    let mut view = use_signal(ViewState::new);
    let client = use_context::<ApiClient>();
    let users_client = client.clone();

    let (message, users, connections) = {
        let state = view.read();
        (
            state.message().to_string(),
            state.users().to_vec(),
            state.connections().to_vec(),
        )
    };

    rsx! {
        main { class: "dashboard",
            ServerStatus {}
            h1 { "Guacamole Dashboard" }

            div { class: "actions",
                button {
                    class: "action-button",
                    r#type: "button",
                    onclick: move |_| {
                        let ticket = view.write().begin(Action::Users);
                        let client = users_client.clone();
                        spawn(async move {
                            let result = client.fetch_users().await;
                            view.write().complete_users(ticket, result);
                        });
                    },
                    "Check if there are users in Guacamole"
                }
                button {
                    class: "action-button",
                    r#type: "button",
                    onclick: move |_| {
                        let ticket = view.write().begin(Action::Connections);
                        let client = client.clone();
                        spawn(async move {
                            let result = client.fetch_connections().await;
                            view.write().complete_connections(ticket, result);
                        });
                    },
                    "Check if there are connections in Guacamole"
                }
            }

            StatusMessage { message }
            UserList { users }
            ConnectionList { connections }
        }
    }
}

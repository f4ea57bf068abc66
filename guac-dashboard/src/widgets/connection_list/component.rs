use dioxus::prelude::*;
use guac_http::ConnectionRecord;

#[component]
pub fn ConnectionList(connections: Vec<ConnectionRecord>) -> Element {
    if connections.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "record-list",
            h2 { "Connections:" }
            ul {
                for connection in connections.iter() {
                    li { key: "{connection.id}", class: "connection-item",
                        div { class: "connection-name", "{connection.name}" }
                        div { class: "connection-details", {connection.summary()} }
                    }
                }
            }
        }
    }
}

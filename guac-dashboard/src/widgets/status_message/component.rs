use dioxus::prelude::*;

#[component]
pub fn StatusMessage(message: String) -> Element {
    rsx! {
        p { class: "status-message", "{message}" }
    }
}

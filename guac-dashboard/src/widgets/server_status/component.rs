use dioxus::prelude::*;

use guac_http::ApiClient;

#[component]
pub fn ServerStatus() -> Element {
    let status_resource = use_resource(move || async move {
        use_context::<ApiClient>()
            .check_status()
            .await
            .map(|status| status.status)
            .unwrap_or_else(|e| {
                warn!("Backend status check failed: {}", e);
                "Down".to_string()
            })
    });

    rsx! {
        div { class: "server-status",
            match status_resource.read().as_ref() {
                Some(status) => {
                    let dot_class = if status.eq("Down") {
                        "status-dot error"
                    } else {
                        "status-dot healthy"
                    };
                    rsx! {
                        span { class: "{dot_class}" }
                        span { "Backend: {status}" }
                    }
                }
                None => rsx! {
                    span { class: "status-dot loading" }
                    span { "Backend: Checking..." }
                },
            }
        }
    }
}

use dioxus::prelude::*;

mod pages;
mod widgets;

use guac_http::ApiClient;
use pages::Dashboard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::new);

    rsx! {
        document::Title { "Guacamole Dashboard" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Dashboard {}
    }
}

use client::config::{configured_session, load_config};
use dioxus::prelude::*;

mod auth;
mod routes;
use auth::{ApiHandle, AuthState};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = load_config();

    // Sign-in happens outside this app; a configured session seeds the state.
    let auth = use_context_provider(|| AuthState::new(configured_session(config)));

    let base_url = config.api.base_url.clone();
    let api = use_memo(move || auth.client_for(&base_url));
    use_context_provider(|| ApiHandle(api));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

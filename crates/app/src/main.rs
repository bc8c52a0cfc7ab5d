use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod session;

use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Auth state and the shared API client live in context for the whole
    // route tree. The client is cheap to clone and carries the token store.
    use_context_provider(AuthState::new);
    use_context_provider(session::create_client);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

use api_client::ClientError;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdScale, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{RegisterRequest, UserRole};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;

use crate::auth::{use_api, use_auth};
use crate::routes::Route;

/// Registration page with an account-type picker (client or lawyer).
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Client);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect to dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();

            if password() != confirm_password() {
                error_msg.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = RegisterRequest {
                name: name(),
                email: email(),
                password: password(),
                role: role(),
            };

            match api.register(&request).await {
                Ok(response) => {
                    auth.set_user(response.user);
                    navigator().push(Route::Dashboard {});
                }
                Err(ClientError::Api(err)) if !err.field_errors.is_empty() => {
                    field_errors.set(err.field_errors);
                }
                Err(err) => {
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Join LegalEase and start your legal journey" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Label { html_for: "name", "Full Name" }
                            Input {
                                id: "name",
                                placeholder: "Jane Doe",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("name") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Create a strong password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "confirm_password", "Confirm Password" }
                            Input {
                                input_type: "password",
                                id: "confirm_password",
                                placeholder: "Confirm your password",
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                        }

                        div { class: "auth-field",
                            Label { "Account Type" }
                            div { class: "auth-role-picker",
                                button {
                                    r#type: "button",
                                    class: "auth-role-option",
                                    "data-selected": if role() == UserRole::Client { "true" } else { "false" },
                                    onclick: move |_| role.set(UserRole::Client),
                                    Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                                    "Client"
                                }
                                button {
                                    r#type: "button",
                                    class: "auth-role-option",
                                    "data-selected": if role() == UserRole::Lawyer { "true" } else { "false" },
                                    onclick: move |_| role.set(UserRole::Lawyer),
                                    Icon::<LdScale> { icon: LdScale, width: 16, height: 16 }
                                    "Lawyer"
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}

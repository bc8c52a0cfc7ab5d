use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdScale;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, NavbarNav};

use crate::auth::use_auth;
use crate::routes::Route;

/// Top navigation shared by the public marketing pages.
#[component]
pub fn SiteNav() -> Element {
    let auth = use_auth();

    rsx! {
        Navbar {
            NavbarBrand {
                Icon::<LdScale> { icon: LdScale, width: 22, height: 22 }
                Link { to: Route::Home {}, class: "site-brand-link", "LegalEase" }
            }
            NavbarNav {
                Link { to: Route::Features {}, "Features" }
                Link { to: Route::LawyerDirectory {}, "Find a Lawyer" }
                Link { to: Route::About {}, "About" }
            }
            NavbarActions {
                if auth.is_authenticated() {
                    Button {
                        onclick: move |_| { navigator().push(Route::Dashboard {}); },
                        "Dashboard"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| { navigator().push(Route::Login {}); },
                        "Sign In"
                    }
                    Button {
                        onclick: move |_| { navigator().push(Route::Register {}); },
                        "Get Started"
                    }
                }
            }
        }
    }
}

/// Footer shared by the public marketing pages.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-inner",
                span { class: "site-footer-brand", "LegalEase" }
                span { class: "site-footer-note",
                    "Connecting clients with trusted legal professionals."
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdScale, LdSearch, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::components::{SiteFooter, SiteNav};
use crate::routes::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        SiteNav {}

        div { class: "hero",
            h1 { class: "hero-title",
                "Legal help, "
                span { class: "hero-accent", "without the runaround" }
            }
            p { class: "hero-subtitle",
                "Find a vetted lawyer, book a consultation, and manage everything in one place."
            }
            div { class: "hero-actions",
                Button {
                    size: ButtonSize::Large,
                    onclick: move |_| { navigator().push(Route::Register {}); },
                    "Get Started"
                }
                Button {
                    size: ButtonSize::Large,
                    variant: ButtonVariant::Outline,
                    onclick: move |_| { navigator().push(Route::LawyerDirectory {}); },
                    "Browse Lawyers"
                }
            }
        }

        section { class: "section",
            h2 { class: "section-title", "How it works" }
            div { class: "card-grid",
                Card {
                    CardHeader {
                        div { class: "feature-icon",
                            Icon::<LdSearch> { icon: LdSearch, width: 22, height: 22 }
                        }
                        CardTitle { "Find your lawyer" }
                    }
                    CardContent {
                        p { "Search the directory by practice area and compare experience and rates." }
                    }
                }
                Card {
                    CardHeader {
                        div { class: "feature-icon",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                        }
                        CardTitle { "Book a consultation" }
                    }
                    CardContent {
                        p { "Pick a time that works for you. Your lawyer confirms the request directly." }
                    }
                }
                Card {
                    CardHeader {
                        div { class: "feature-icon",
                            Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                        }
                        CardTitle { "Stay on top of it" }
                    }
                    CardContent {
                        p { "Track every consultation from request to completion in your dashboard." }
                    }
                }
            }
        }

        section { class: "section stats-strip",
            div { class: "stat-item",
                div { class: "stat-number", "500+" }
                div { class: "stat-label", "Verified Lawyers" }
            }
            div { class: "stat-item",
                div { class: "stat-number", "10,000+" }
                div { class: "stat-label", "Happy Clients" }
            }
            div { class: "stat-item",
                div { class: "stat-number", "4.9/5" }
                div { class: "stat-label", "Average Rating" }
            }
            div { class: "stat-item",
                div { class: "stat-number", "24/7" }
                div { class: "stat-label", "Support Available" }
            }
        }

        section { class: "section cta-section",
            Icon::<LdScale> { icon: LdScale, width: 36, height: 36 }
            h2 { class: "section-title", "Ready to get started?" }
            p { class: "cta-subtitle", "Create a free account as a client or a lawyer." }
            Button {
                size: ButtonSize::Large,
                onclick: move |_| { navigator().push(Route::Register {}); },
                "Join LegalEase"
            }
        }

        SiteFooter {}
    }
}

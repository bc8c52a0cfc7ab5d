use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use crate::components::{SiteFooter, SiteNav};

/// Public about page.
#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        SiteNav {}

        div { class: "hero",
            h1 { class: "hero-title", "About LegalEase" }
            p { class: "hero-subtitle",
                "We believe finding the right lawyer should not be harder than the legal problem itself."
            }
        }

        section { class: "section",
            div { class: "card-grid",
                Card {
                    CardHeader { CardTitle { "Our Mission" } }
                    CardContent {
                        p {
                            "LegalEase connects people who need legal help with professionals who can provide it. "
                            "We remove the friction: clear profiles, published rates, and scheduling that takes minutes."
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "For Clients" } }
                    CardContent {
                        p {
                            "Browse vetted lawyers, compare specializations, and request a consultation at a time "
                            "that suits you. Track every request from your dashboard."
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "For Lawyers" } }
                    CardContent {
                        p {
                            "Publish your practice profile and manage incoming consultation requests in one queue. "
                            "Accept, decline, and keep your caseload organized."
                        }
                    }
                }
            }
        }

        section { class: "section stats-strip",
            div { class: "stat-item",
                div { class: "stat-number", "2019" }
                div { class: "stat-label", "Founded" }
            }
            div { class: "stat-item",
                div { class: "stat-number", "40+" }
                div { class: "stat-label", "Practice Areas" }
            }
            div { class: "stat-item",
                div { class: "stat-number", "12" }
                div { class: "stat-label", "States Covered" }
            }
        }

        SiteFooter {}
    }
}

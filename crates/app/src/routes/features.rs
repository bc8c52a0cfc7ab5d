use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdFileText, LdSearch, LdShield, LdUserCheck,
};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use crate::components::{SiteFooter, SiteNav};

/// Public features overview page.
#[component]
pub fn Features() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        SiteNav {}

        div { class: "hero",
            h1 { class: "hero-title", "Everything you need to manage legal work" }
            p { class: "hero-subtitle",
                "From the first search to the final consultation, LegalEase keeps clients and lawyers in sync."
            }
        }

        section { class: "section",
            div { class: "card-grid",
                FeatureCard {
                    title: "Verified Lawyers",
                    body: "Every lawyer on the platform is licensed and vetted before their profile goes live.",
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 22, height: 22 } },
                }
                FeatureCard {
                    title: "Smart Search",
                    body: "Filter the directory by practice area, experience, and hourly rate.",
                    icon: rsx! { Icon::<LdSearch> { icon: LdSearch, width: 22, height: 22 } },
                }
                FeatureCard {
                    title: "Simple Scheduling",
                    body: "Request a consultation in two clicks; lawyers accept or decline from their dashboard.",
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
                }
                FeatureCard {
                    title: "Case Tracking",
                    body: "Lawyers see every engagement as a case card, from pending request to completion.",
                    icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 22, height: 22 } },
                }
                FeatureCard {
                    title: "Secure Sessions",
                    body: "Short-lived access tokens with silent renewal keep your account safe without constant sign-ins.",
                    icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 22, height: 22 } },
                }
                FeatureCard {
                    title: "Transparent Pricing",
                    body: "Hourly rates are published on every profile. No hidden fees or surprises.",
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 } },
                }
            }
        }

        SiteFooter {}
    }
}

#[component]
fn FeatureCard(title: String, body: String, icon: Element) -> Element {
    rsx! {
        Card {
            CardHeader {
                div { class: "feature-icon", {icon} }
                CardTitle { "{title}" }
            }
            CardContent {
                p { "{body}" }
            }
        }
    }
}

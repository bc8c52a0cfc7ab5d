use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::Consultation;
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle,
    PageTitle, Skeleton,
};

use crate::auth::{use_api, use_user_id};
use crate::format_helpers::format_date_human;
use crate::routes::dashboard::status_badge_variant;

/// Lawyer case board: every engagement as a card.
#[component]
pub fn CasesPage() -> Element {
    let api = use_api();
    let user_id = use_user_id();

    let data = use_resource(move || {
        let api = api.clone();
        let user_id = user_id.clone();
        async move {
            if user_id.is_empty() {
                return Ok(Vec::new());
            }
            api.list_consultations_for_lawyer(&user_id).await
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                div {
                    PageTitle { "My Cases" }
                    PageSubtitle { "Track and manage your ongoing cases" }
                }
            }

            match &*data.read() {
                Some(Ok(consultations)) if consultations.is_empty() => rsx! {
                    div { class: "dashboard-empty",
                        Icon::<LdFileText> { icon: LdFileText, width: 40, height: 40 }
                        p { class: "dashboard-empty-title", "No cases yet" }
                    }
                },
                Some(Ok(consultations)) => rsx! {
                    div { class: "cases-grid",
                        for consultation in consultations.iter() {
                            CaseCard { consultation: consultation.clone() }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "dashboard-error", {err.friendly_message()} }
                    div { class: "dashboard-empty",
                        p { class: "dashboard-empty-title", "No cases to show" }
                    }
                },
                None => rsx! {
                    div { class: "cases-grid",
                        for _ in 0..3 {
                            Card { CardContent { Skeleton { style: "height: 80px;" } } }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CaseCard(consultation: Consultation) -> Element {
    let client_name = consultation
        .client
        .as_ref()
        .map(|p| p.display_name("Client").to_string())
        .unwrap_or_else(|| "Client".to_string());
    let date = format_date_human(&consultation.scheduled_at);
    let variant = status_badge_variant(consultation.status);
    let status = consultation.status.as_str();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    div { class: "case-card-title",
                        Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        "{client_name}"
                    }
                }
                CardDescription { "{date}" }
            }
            CardContent {
                Badge { variant: variant, "{status}" }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{with_status, Consultation, ConsultationStatus};
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Skeleton, StatCard, StatTone,
};

use crate::auth::{use_api, use_auth, use_user_id};
use crate::format_helpers::format_date_human;
use crate::routes::dashboard::status_badge_variant;
use crate::routes::Route;

/// Client dashboard: stat tiles plus the latest consultation bookings.
#[component]
pub fn ClientDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let user_id = use_user_id();

    let data = use_resource(move || {
        let api = api.clone();
        let user_id = user_id.clone();
        async move {
            if user_id.is_empty() {
                return Ok(Vec::new());
            }
            api.list_consultations_for_client(&user_id).await
        }
    });

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-welcome",
                h1 { "Welcome back, {display_name}!" }
                p { "Here's what's happening with your legal consultations." }
            }

            match &*data.read() {
                Some(Ok(consultations)) => rsx! {
                    ClientStats { consultations: consultations.clone() }
                    RecentConsultations { consultations: consultations.clone() }
                },
                Some(Err(err)) => rsx! {
                    div { class: "dashboard-error", {err.friendly_message()} }
                    ClientStats { consultations: Vec::new() }
                    RecentConsultations { consultations: Vec::new() }
                },
                None => rsx! {
                    div { class: "dashboard-stats-grid",
                        for _ in 0..3 {
                            Card { CardContent { Skeleton {} } }
                        }
                    }
                    Card {
                        CardContent { Skeleton { style: "height: 160px;" } }
                    }
                },
            }
        }
    }
}

#[component]
fn ClientStats(consultations: Vec<Consultation>) -> Element {
    let total = consultations.len();
    let pending = with_status(&consultations, ConsultationStatus::Pending).len();
    let completed = with_status(&consultations, ConsultationStatus::Completed).len();

    rsx! {
        div { class: "dashboard-stats-grid",
            StatCard {
                title: "Total Consultations".to_string(),
                value: total.to_string(),
                tone: StatTone::Info,
                Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
            }
            StatCard {
                title: "Pending".to_string(),
                value: pending.to_string(),
                tone: StatTone::Warning,
                Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
            }
            StatCard {
                title: "Completed".to_string(),
                value: completed.to_string(),
                tone: StatTone::Success,
                Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 }
            }
        }
    }
}

#[component]
fn RecentConsultations(consultations: Vec<Consultation>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recent Consultations" }
                CardDescription { "Your latest consultation bookings" }
            }
            CardContent {
                if consultations.is_empty() {
                    div { class: "dashboard-empty",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 40, height: 40 }
                        p { class: "dashboard-empty-title", "No consultations yet" }
                        p { class: "dashboard-empty-hint", "Book your first consultation with a lawyer" }
                        Button {
                            size: ButtonSize::Small,
                            onclick: move |_| { navigator().push(Route::DashboardLawyers {}); },
                            "Find a Lawyer"
                        }
                    }
                } else {
                    div { class: "dashboard-list",
                        for consultation in consultations.iter().take(5) {
                            {
                                let lawyer_name = consultation
                                    .lawyer
                                    .as_ref()
                                    .map(|p| p.display_name("Unknown Lawyer").to_string())
                                    .unwrap_or_else(|| "Unknown Lawyer".to_string());
                                let date = format_date_human(&consultation.scheduled_at);
                                let variant = status_badge_variant(consultation.status);
                                let status = consultation.status.as_str();

                                rsx! {
                                    div { class: "dashboard-list-item",
                                        div { class: "dashboard-list-item-main",
                                            p { class: "dashboard-list-item-title", "Atty. {lawyer_name}" }
                                            p { class: "dashboard-list-item-meta", "{date}" }
                                        }
                                        div { class: "dashboard-list-item-actions",
                                            Badge { variant: variant, "{status}" }
                                            Button {
                                                size: ButtonSize::Small,
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| { navigator().push(Route::Consultations {}); },
                                                "View Details"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdCalendar, LdClock, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{with_status, Consultation, ConsultationStatus};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Skeleton, StatCard, StatTone, ToastOptions,
};

use crate::auth::{use_api, use_auth, use_user_id};
use crate::format_helpers::{format_date_human, format_datetime_human};
use crate::routes::dashboard::status_badge_variant;

/// Flat consultation fee credited per completed engagement.
const COMPLETED_CONSULTATION_FEE: usize = 100;

/// Lawyer dashboard: stat tiles, the pending-request queue, and recent
/// consultations.
#[component]
pub fn LawyerDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let user_id = use_user_id();
    let toast = use_toast();

    let fetch_api = api.clone();
    let fetch_id = user_id.clone();
    let mut data = use_resource(move || {
        let api = fetch_api.clone();
        let user_id = fetch_id.clone();
        async move {
            if user_id.is_empty() {
                return Ok(Vec::new());
            }
            api.list_consultations_for_lawyer(&user_id).await
        }
    });

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let handle_status_update = move |(id, status): (String, ConsultationStatus)| {
        let api = api.clone();
        spawn(async move {
            match api.update_consultation_status(&id, status).await {
                Ok(_) => data.restart(),
                Err(err) => {
                    tracing::warn!(error = %err, "consultation status update failed");
                    toast.error(
                        "Failed to update consultation status".to_string(),
                        ToastOptions::new(),
                    );
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-welcome",
                h1 { "Welcome back, Atty. {display_name}!" }
                p { "Manage your consultations and client requests." }
            }

            match &*data.read() {
                Some(Ok(consultations)) => rsx! {
                    LawyerStats { consultations: consultations.clone() }
                    PendingRequests {
                        consultations: consultations.clone(),
                        on_update: handle_status_update,
                    }
                    RecentActivity { consultations: consultations.clone() }
                },
                Some(Err(err)) => rsx! {
                    div { class: "dashboard-error", {err.friendly_message()} }
                    LawyerStats { consultations: Vec::new() }
                    RecentActivity { consultations: Vec::new() }
                },
                None => rsx! {
                    div { class: "dashboard-stats-grid",
                        for _ in 0..4 {
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
fn LawyerStats(consultations: Vec<Consultation>) -> Element {
    let total = consultations.len();
    let pending = with_status(&consultations, ConsultationStatus::Pending).len();
    let completed = with_status(&consultations, ConsultationStatus::Completed).len();
    let earnings = format!("${}", completed * COMPLETED_CONSULTATION_FEE);

    rsx! {
        div { class: "dashboard-stats-grid",
            StatCard {
                title: "Total Consultations".to_string(),
                value: total.to_string(),
                tone: StatTone::Info,
                Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
            }
            StatCard {
                title: "Pending Requests".to_string(),
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
            StatCard {
                title: "Earnings".to_string(),
                value: earnings,
                tone: StatTone::Success,
                Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 }
            }
        }
    }
}

#[component]
fn PendingRequests(
    consultations: Vec<Consultation>,
    on_update: EventHandler<(String, ConsultationStatus)>,
) -> Element {
    let pending: Vec<Consultation> = with_status(&consultations, ConsultationStatus::Pending)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Pending Consultation Requests" }
                CardDescription { "Review and respond to client requests" }
            }
            CardContent {
                if pending.is_empty() {
                    div { class: "dashboard-empty",
                        Icon::<LdClock> { icon: LdClock, width: 40, height: 40 }
                        p { class: "dashboard-empty-title", "No pending requests" }
                        p { class: "dashboard-empty-hint", "All consultation requests have been processed" }
                    }
                } else {
                    div { class: "dashboard-list",
                        for consultation in pending.iter() {
                            {
                                let client_name = consultation
                                    .client
                                    .as_ref()
                                    .map(|p| p.display_name("Unknown Client").to_string())
                                    .unwrap_or_else(|| "Unknown Client".to_string());
                                let client_email = consultation
                                    .client
                                    .as_ref()
                                    .and_then(|p| p.contact_email().map(str::to_string))
                                    .unwrap_or_default();
                                let when = format_datetime_human(&consultation.scheduled_at);
                                let accept_id = consultation.id.clone();
                                let decline_id = consultation.id.clone();

                                rsx! {
                                    div { class: "dashboard-list-item",
                                        div { class: "dashboard-list-item-main",
                                            p { class: "dashboard-list-item-title", "{client_name}" }
                                            p { class: "dashboard-list-item-meta", "{when}" }
                                            if !client_email.is_empty() {
                                                p { class: "dashboard-list-item-meta", "{client_email}" }
                                            }
                                        }
                                        div { class: "dashboard-list-item-actions",
                                            Button {
                                                size: ButtonSize::Small,
                                                onclick: move |_| on_update.call((accept_id.clone(), ConsultationStatus::Confirmed)),
                                                "Accept"
                                            }
                                            Button {
                                                size: ButtonSize::Small,
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| on_update.call((decline_id.clone(), ConsultationStatus::Rejected)),
                                                "Decline"
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

#[component]
fn RecentActivity(consultations: Vec<Consultation>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recent Consultations" }
                CardDescription { "Your latest consultation activities" }
            }
            CardContent {
                if consultations.is_empty() {
                    div { class: "dashboard-empty",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 40, height: 40 }
                        p { class: "dashboard-empty-title", "No consultations yet" }
                        p { class: "dashboard-empty-hint", "Your consultation history will appear here" }
                    }
                } else {
                    div { class: "dashboard-list",
                        for consultation in consultations.iter().take(5) {
                            {
                                let client_name = consultation
                                    .client
                                    .as_ref()
                                    .map(|p| p.display_name("Unknown Client").to_string())
                                    .unwrap_or_else(|| "Unknown Client".to_string());
                                let date = format_date_human(&consultation.scheduled_at);
                                let variant = status_badge_variant(consultation.status);
                                let status = consultation.status.as_str();

                                rsx! {
                                    div { class: "dashboard-list-item",
                                        div { class: "dashboard-list-item-main",
                                            p { class: "dashboard-list-item-title", "{client_name}" }
                                            p { class: "dashboard-list-item-meta", "{date}" }
                                        }
                                        Badge { variant: variant, "{status}" }
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

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use dioxus_free_icons::Icon;
use shared_types::{Consultation, ConsultationStatus, UserRole};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    FormSelect, PageHeader, PageSubtitle, PageTitle, Skeleton, ToastOptions,
};

use crate::auth::{use_api, use_user_id, use_user_role};
use crate::format_helpers::{format_datetime_human, is_upcoming};
use crate::routes::dashboard::status_badge_variant;

/// Full consultation list with status filtering.
///
/// Clients see the lawyer on each booking; lawyers see the client and can
/// act on pending requests.
#[component]
pub fn ConsultationsPage() -> Element {
    let api = use_api();
    let role = use_user_role();
    let user_id = use_user_id();
    let toast = use_toast();

    let mut filter = use_signal(|| "ALL".to_string());

    let fetch_api = api.clone();
    let fetch_id = user_id.clone();
    let mut data = use_resource(move || {
        let api = fetch_api.clone();
        let user_id = fetch_id.clone();
        async move {
            if user_id.is_empty() {
                return Ok(Vec::new());
            }
            match role {
                UserRole::Lawyer => api.list_consultations_for_lawyer(&user_id).await,
                UserRole::Client => api.list_consultations_for_client(&user_id).await,
            }
        }
    });

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
            PageHeader {
                div {
                    PageTitle { "Consultations" }
                    PageSubtitle {
                        if role == UserRole::Lawyer {
                            "Requests from clients, past and present"
                        } else {
                            "Every consultation you have booked"
                        }
                    }
                }
            }

            div { class: "consultations-filter",
                FormSelect {
                    label: "Status",
                    value: filter(),
                    onchange: move |evt: Event<FormData>| filter.set(evt.value()),
                    option { value: "ALL", "All statuses" }
                    option { value: "PENDING", "Pending" }
                    option { value: "CONFIRMED", "Confirmed" }
                    option { value: "COMPLETED", "Completed" }
                    option { value: "REJECTED", "Rejected" }
                }
            }

            match &*data.read() {
                Some(Ok(consultations)) => rsx! {
                    ConsultationList {
                        consultations: consultations.clone(),
                        filter: filter(),
                        role: role,
                        on_update: handle_status_update,
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "dashboard-error", {err.friendly_message()} }
                    Card {
                        CardContent {
                            div { class: "dashboard-empty",
                                p { class: "dashboard-empty-title", "No consultations to show" }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "dashboard-list",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn ConsultationList(
    consultations: Vec<Consultation>,
    filter: String,
    role: UserRole,
    on_update: EventHandler<(String, ConsultationStatus)>,
) -> Element {
    let consultations: Vec<Consultation> = consultations
        .into_iter()
        .filter(|c| filter == "ALL" || c.status.as_str() == filter)
        .collect();

    if consultations.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    div { class: "dashboard-empty",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 40, height: 40 }
                        p { class: "dashboard-empty-title", "No consultations found" }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "dashboard-list",
            for consultation in consultations.iter() {
                {
                    let counterpart = match role {
                        UserRole::Lawyer => consultation
                            .client
                            .as_ref()
                            .map(|p| p.display_name("Unknown Client").to_string())
                            .unwrap_or_else(|| "Unknown Client".to_string()),
                        UserRole::Client => consultation
                            .lawyer
                            .as_ref()
                            .map(|p| format!("Atty. {}", p.display_name("Unknown Lawyer")))
                            .unwrap_or_else(|| "Unknown Lawyer".to_string()),
                    };
                    let when = format_datetime_human(&consultation.scheduled_at);
                    let variant = status_badge_variant(consultation.status);
                    let status = consultation.status.as_str();
                    let is_pending = consultation.status.is_pending();
                    let upcoming = consultation.status == ConsultationStatus::Confirmed
                        && is_upcoming(&consultation.scheduled_at);
                    let accept_id = consultation.id.clone();
                    let decline_id = consultation.id.clone();

                    rsx! {
                        div { class: "dashboard-list-item",
                            div { class: "dashboard-list-item-main",
                                p { class: "dashboard-list-item-title", "{counterpart}" }
                                p { class: "dashboard-list-item-meta", "{when}" }
                            }
                            div { class: "dashboard-list-item-actions",
                                if upcoming {
                                    Badge { variant: BadgeVariant::Outline, "UPCOMING" }
                                }
                                Badge { variant: variant, "{status}" }
                                if role == UserRole::Lawyer && is_pending {
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

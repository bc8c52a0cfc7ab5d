use dioxus::prelude::*;
use shared_types::{CreateConsultationRequest, LawyerProfile};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FormSelect, Input, SearchBar, Skeleton, ToastOptions,
};

use crate::auth::use_api;

/// Lawyer directory for signed-in clients, with a booking form.
#[component]
pub fn DashboardLawyersPage() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut search_input = use_signal(String::new);
    let mut search_query = use_signal(String::new);

    let mut selected_lawyer = use_signal(String::new);
    let mut scheduled_at = use_signal(String::new);
    let mut booking = use_signal(|| false);

    let fetch_api = api.clone();
    let data = use_resource(move || {
        let api = fetch_api.clone();
        let query = search_query.read().clone();
        async move {
            let query = if query.is_empty() {
                None
            } else {
                Some(query.as_str())
            };
            api.list_lawyers(query).await
        }
    });

    let handle_search = move |_| {
        search_query.set(search_input.read().clone());
    };

    let handle_book = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();

            let lawyer_id = selected_lawyer();
            let when = scheduled_at();
            if lawyer_id.is_empty() || when.is_empty() {
                toast.error(
                    "Pick a lawyer and a time first".to_string(),
                    ToastOptions::new(),
                );
                return;
            }

            booking.set(true);
            let request = CreateConsultationRequest {
                lawyer_id,
                scheduled_at: when,
            };

            match api.create_consultation(&request).await {
                Ok(_) => {
                    selected_lawyer.set(String::new());
                    scheduled_at.set(String::new());
                    toast.success(
                        "Consultation requested".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(err) => {
                    toast.error(err.friendly_message(), ToastOptions::new());
                }
            }
            booking.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            Card {
                CardHeader {
                    CardTitle { "Book a Consultation" }
                    CardDescription { "Choose a lawyer and a time that works for you" }
                }
                CardContent {
                    form { class: "booking-form", onsubmit: handle_book,
                        FormSelect {
                            label: "Lawyer",
                            value: selected_lawyer(),
                            onchange: move |evt: Event<FormData>| selected_lawyer.set(evt.value()),
                            option { value: "", "Select a lawyer..." }
                            if let Some(Ok(lawyers)) = &*data.read() {
                                for lawyer in lawyers.iter() {
                                    option { value: "{lawyer.id}", "{lawyer.name} — {lawyer.specialization}" }
                                }
                            }
                        }
                        Input {
                            label: "Date & Time",
                            input_type: "datetime-local",
                            value: scheduled_at(),
                            on_input: move |evt: FormEvent| scheduled_at.set(evt.value()),
                        }
                        Button {
                            disabled: booking(),
                            if booking() { "Booking..." } else { "Book Consultation" }
                        }
                    }
                }
            }

            SearchBar {
                Input {
                    value: search_input.read().clone(),
                    placeholder: "Search by name or practice area...",
                    on_input: move |evt: FormEvent| search_input.set(evt.value()),
                }
                Button { onclick: handle_search, "Search" }
            }

            match &*data.read() {
                Some(Ok(lawyers)) if lawyers.is_empty() => rsx! {
                    Card {
                        CardContent {
                            p { "No lawyers matched your search." }
                        }
                    }
                },
                Some(Ok(lawyers)) => rsx! {
                    div { class: "cases-grid",
                        for lawyer in lawyers.iter() {
                            DirectoryCard { lawyer: lawyer.clone() }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "dashboard-error", {err.friendly_message()} }
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
fn DirectoryCard(lawyer: LawyerProfile) -> Element {
    let rate = format!("${:.0}/hr", lawyer.hourly_rate);
    let experience = format!("{} yrs", lawyer.years_of_experience);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Atty. {lawyer.name}" }
                div { class: "directory-card-badges",
                    if !lawyer.specialization.is_empty() {
                        Badge { variant: BadgeVariant::Primary, "{lawyer.specialization}" }
                    }
                    Badge { variant: BadgeVariant::Outline, "{experience}" }
                    Badge { variant: BadgeVariant::Secondary, "{rate}" }
                }
            }
            CardContent {
                if lawyer.bio.is_empty() {
                    p { class: "dashboard-list-item-meta", "No bio provided yet." }
                } else {
                    p { class: "dashboard-list-item-meta", "{lawyer.bio}" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::LawyerProfile;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input,
    SearchBar, Skeleton,
};

use crate::auth::{use_api, use_auth};
use crate::components::{SiteFooter, SiteNav};
use crate::routes::Route;

/// Public lawyer directory with free-text search.
#[component]
pub fn LawyerDirectoryPage() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut search_input = use_signal(String::new);
    let mut search_query = use_signal(String::new);

    let data = use_resource(move || {
        let api = api.clone();
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

    let handle_clear = move |_| {
        search_input.set(String::new());
        search_query.set(String::new());
    };

    let book_target = if auth.is_authenticated() {
        Route::DashboardLawyers {}
    } else {
        Route::Register {}
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./directory.css") }

        SiteNav {}

        div { class: "directory-page",
            h1 { class: "directory-title", "Find a Lawyer" }
            p { class: "directory-subtitle",
                "Browse verified legal professionals and book your first consultation."
            }

            SearchBar {
                Input {
                    value: search_input.read().clone(),
                    placeholder: "Search by name or practice area...",
                    on_input: move |evt: FormEvent| search_input.set(evt.value()),
                }
                Button { onclick: handle_search, "Search" }
                if !search_query.read().is_empty() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_clear,
                        "Clear"
                    }
                }
            }

            match &*data.read() {
                Some(Ok(lawyers)) if lawyers.is_empty() => rsx! {
                    div { class: "directory-empty",
                        p { "No lawyers matched your search." }
                    }
                },
                Some(Ok(lawyers)) => rsx! {
                    div { class: "directory-grid",
                        for lawyer in lawyers.iter() {
                            LawyerCard {
                                lawyer: lawyer.clone(),
                                book_target: book_target.clone(),
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "directory-error", {err.friendly_message()} }
                    div { class: "directory-empty",
                        p { "No lawyers to show." }
                    }
                },
                None => rsx! {
                    div { class: "directory-grid",
                        for _ in 0..3 {
                            Card {
                                CardContent { Skeleton { style: "height: 120px;" } }
                            }
                        }
                    }
                },
            }
        }

        SiteFooter {}
    }
}

#[component]
fn LawyerCard(lawyer: LawyerProfile, book_target: Route) -> Element {
    let rate = format!("${:.0}/hr", lawyer.hourly_rate);
    let experience = format!("{} yrs experience", lawyer.years_of_experience);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Atty. {lawyer.name}" }
                div { class: "directory-card-badges",
                    if !lawyer.specialization.is_empty() {
                        Badge { variant: BadgeVariant::Primary, "{lawyer.specialization}" }
                    }
                    Badge { variant: BadgeVariant::Outline, "{experience}" }
                }
            }
            CardContent {
                if !lawyer.bio.is_empty() {
                    p { class: "directory-card-bio", "{lawyer.bio}" }
                }
                div { class: "directory-card-footer",
                    span { class: "directory-card-rate", "{rate}" }
                    Button {
                        onclick: move |_| { navigator().push(book_target.clone()); },
                        "Book Consultation"
                    }
                }
            }
        }
    }
}

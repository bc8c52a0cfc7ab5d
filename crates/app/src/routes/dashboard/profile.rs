use dioxus::prelude::*;
use shared_types::{LawyerProfile, UpdateLawyerRequest, UserRole};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Skeleton, Textarea, ToastOptions,
};

use crate::auth::{use_api, use_auth, use_user_id, use_user_role};

/// Account page. Lawyers additionally edit their public practice profile.
#[component]
pub fn ProfilePage() -> Element {
    let auth = use_auth();
    let api = use_api();
    let role = use_user_role();
    let user_id = use_user_id();

    let (name, email) = {
        let binding = auth.current_user.read();
        let user = binding.as_ref();
        (
            user.map(|u| u.name.clone()).unwrap_or_default(),
            user.map(|u| u.email.clone()).unwrap_or_default(),
        )
    };

    let role_badge = match role {
        UserRole::Lawyer => "LAWYER",
        UserRole::Client => "CLIENT",
    };

    let profile = use_resource(move || {
        let api = api.clone();
        let user_id = user_id.clone();
        async move {
            if role != UserRole::Lawyer || user_id.is_empty() {
                return Ok(None);
            }
            api.get_lawyer(&user_id).await.map(Some)
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            Card {
                CardHeader {
                    CardTitle { "Account" }
                    CardDescription { "Your LegalEase identity" }
                }
                CardContent {
                    div { class: "profile-row",
                        span { class: "profile-label", "Name" }
                        span { class: "profile-value", "{name}" }
                    }
                    div { class: "profile-row",
                        span { class: "profile-label", "Email" }
                        span { class: "profile-value", "{email}" }
                    }
                    div { class: "profile-row",
                        span { class: "profile-label", "Role" }
                        Badge { variant: BadgeVariant::Primary, "{role_badge}" }
                    }
                }
            }

            if role == UserRole::Lawyer {
                match &*profile.read() {
                    Some(Ok(Some(profile))) => rsx! {
                        PracticeProfileForm { profile: profile.clone() }
                    },
                    Some(Ok(None)) => rsx! {},
                    Some(Err(err)) => rsx! {
                        div { class: "dashboard-error", {err.friendly_message()} }
                    },
                    None => rsx! {
                        Card {
                            CardContent { Skeleton { style: "height: 180px;" } }
                        }
                    },
                }
            }
        }
    }
}

/// Editable practice profile. Signals initialize from the fetched record
/// when the component mounts.
#[component]
fn PracticeProfileForm(profile: LawyerProfile) -> Element {
    let api = use_api();
    let toast = use_toast();

    let profile_id = profile.id.clone();
    let initial_specialization = profile.specialization.clone();
    let initial_bio = profile.bio.clone();
    let initial_rate = if profile.hourly_rate > 0.0 {
        format!("{:.0}", profile.hourly_rate)
    } else {
        String::new()
    };

    let mut specialization = use_signal(move || initial_specialization);
    let mut bio = use_signal(move || initial_bio);
    let mut hourly_rate = use_signal(move || initial_rate);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        let api = api.clone();
        let id = profile_id.clone();
        async move {
            evt.prevent_default();
            saving.set(true);

            let request = UpdateLawyerRequest {
                specialization: specialization(),
                bio: bio(),
                hourly_rate: hourly_rate().parse().unwrap_or(0.0),
            };

            match api.update_lawyer(&id, &request).await {
                Ok(_) => {
                    toast.success("Profile updated".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(err.friendly_message(), ToastOptions::new());
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Practice Profile" }
                CardDescription { "What clients see in the lawyer directory" }
            }
            CardContent {
                form { class: "profile-form", onsubmit: handle_save,
                    Input {
                        label: "Specialization",
                        placeholder: "e.g. Family Law",
                        value: specialization(),
                        on_input: move |e: FormEvent| specialization.set(e.value()),
                    }
                    Input {
                        label: "Hourly Rate (USD)",
                        input_type: "number",
                        placeholder: "150",
                        value: hourly_rate(),
                        on_input: move |e: FormEvent| hourly_rate.set(e.value()),
                    }
                    Textarea {
                        label: "Bio",
                        placeholder: "Tell clients about your practice...",
                        value: bio(),
                        on_input: move |e: FormEvent| bio.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "form-submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Profile" }
                    }
                }
            }
        }
    }
}

pub mod cases;
pub mod client;
pub mod consultations;
pub mod lawyer;
pub mod lawyers;
pub mod profile;

use dioxus::prelude::*;
use shared_types::{ConsultationStatus, UserRole};
use shared_ui::BadgeVariant;

use crate::auth::use_user_role;

/// Role-adaptive dashboard — renders the client or lawyer variant.
#[component]
pub fn Dashboard() -> Element {
    match use_user_role() {
        UserRole::Lawyer => rsx! { lawyer::LawyerDashboard {} },
        UserRole::Client => rsx! { client::ClientDashboard {} },
    }
}

/// Map a consultation status to its badge color.
pub(crate) fn status_badge_variant(status: ConsultationStatus) -> BadgeVariant {
    match status {
        ConsultationStatus::Pending => BadgeVariant::Warning,
        ConsultationStatus::Confirmed => BadgeVariant::Primary,
        ConsultationStatus::Completed => BadgeVariant::Success,
        ConsultationStatus::Rejected => BadgeVariant::Destructive,
    }
}

use serde::{Deserialize, Serialize};

/// Lifecycle status of a consultation.
///
/// The backend owns all transitions; the client only displays statuses and
/// requests updates. Wire literals are uppercase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Rejected,
}

impl ConsultationStatus {
    /// Wire literal for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "PENDING",
            ConsultationStatus::Confirmed => "CONFIRMED",
            ConsultationStatus::Completed => "COMPLETED",
            ConsultationStatus::Rejected => "REJECTED",
        }
    }

    /// Parse a status string, defaulting to Pending for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "CONFIRMED" => ConsultationStatus::Confirmed,
            "COMPLETED" => ConsultationStatus::Completed,
            "REJECTED" => ConsultationStatus::Rejected,
            _ => ConsultationStatus::Pending,
        }
    }

    /// Whether the record still awaits a lawyer decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, ConsultationStatus::Pending)
    }
}

/// A user reference nested inside a party record. Some backend responses
/// nest the display fields one level deeper under `user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartyUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Client or lawyer participant on a consultation.
///
/// Display fields may appear flat (`name`, `email`) or nested under
/// `user`; both shapes deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationParty {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PartyUser>,
}

impl ConsultationParty {
    /// Resolve a display name from either shape, with a caller-provided
    /// fallback (e.g. "Unknown Lawyer").
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .or(self.name.as_deref())
            .unwrap_or(fallback)
    }

    /// Resolve a contact email from either shape.
    pub fn contact_email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref())
            .or(self.email.as_deref())
    }
}

/// A scheduled engagement between a client and a lawyer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: String,
    #[serde(default)]
    pub status: ConsultationStatus,
    /// Scheduled time as an ISO-8601 string; never interpreted beyond
    /// display and ordering.
    pub scheduled_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ConsultationParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lawyer: Option<ConsultationParty>,
}

/// Request body for `POST /consultations`. Both fields are required by
/// the backend DTO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultationRequest {
    pub lawyer_id: String,
    pub scheduled_at: String,
}

/// Request body for `PATCH /consultations/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsultationStatusRequest {
    pub status: ConsultationStatus,
}

/// Filter a consultation list down to the records with the given status.
/// Dashboards use this for stat tiles and the pending-request queue.
pub fn with_status(
    consultations: &[Consultation],
    status: ConsultationStatus,
) -> Vec<&Consultation> {
    consultations
        .iter()
        .filter(|c| c.status == status)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: ConsultationStatus) -> Consultation {
        Consultation {
            id: "c-1".into(),
            status,
            scheduled_at: "2026-08-10T14:00:00".into(),
            client: None,
            lawyer: None,
        }
    }

    #[test]
    fn status_wire_literals() {
        assert_eq!(
            serde_json::to_string(&ConsultationStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&ConsultationStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn status_from_str_or_default() {
        assert_eq!(
            ConsultationStatus::from_str_or_default("confirmed"),
            ConsultationStatus::Confirmed
        );
        assert_eq!(
            ConsultationStatus::from_str_or_default("CANCELLED"),
            ConsultationStatus::Pending
        );
    }

    #[test]
    fn status_as_str_roundtrip() {
        for status in [
            ConsultationStatus::Pending,
            ConsultationStatus::Confirmed,
            ConsultationStatus::Completed,
            ConsultationStatus::Rejected,
        ] {
            assert_eq!(
                ConsultationStatus::from_str_or_default(status.as_str()),
                status
            );
        }
    }

    #[test]
    fn consultation_deserializes_with_flat_party() {
        let json = r#"{
            "id": "c-9",
            "status": "PENDING",
            "scheduledAt": "2026-08-10T14:00:00",
            "lawyer": {"id": "l-1", "name": "Jane Doe", "email": "jane@firm.com"}
        }"#;
        let c: Consultation = serde_json::from_str(json).unwrap();

        assert_eq!(c.status, ConsultationStatus::Pending);
        let lawyer = c.lawyer.unwrap();
        assert_eq!(lawyer.display_name("Unknown"), "Jane Doe");
        assert_eq!(lawyer.contact_email(), Some("jane@firm.com"));
    }

    #[test]
    fn consultation_deserializes_with_nested_party_user() {
        let json = r#"{
            "id": "c-10",
            "status": "CONFIRMED",
            "scheduledAt": "2026-08-11T09:30:00",
            "client": {"id": "u-2", "user": {"name": "John Smith", "email": "john@mail.com"}}
        }"#;
        let c: Consultation = serde_json::from_str(json).unwrap();

        let client = c.client.unwrap();
        assert_eq!(client.display_name("Unknown"), "John Smith");
        assert_eq!(client.contact_email(), Some("john@mail.com"));
    }

    #[test]
    fn party_display_name_falls_back() {
        let party = ConsultationParty::default();
        assert_eq!(party.display_name("Unknown Lawyer"), "Unknown Lawyer");
    }

    #[test]
    fn unknown_status_defaults_to_pending() {
        let json = r#"{"id":"c-2","status":"ON_HOLD","scheduledAt":"2026-08-10T14:00:00"}"#;
        let c: Consultation = serde_json::from_str(json).unwrap();
        assert_eq!(c.status, ConsultationStatus::Pending);
    }

    #[test]
    fn with_status_filters_correctly() {
        let items = vec![
            sample(ConsultationStatus::Pending),
            sample(ConsultationStatus::Confirmed),
            sample(ConsultationStatus::Pending),
            sample(ConsultationStatus::Completed),
        ];

        assert_eq!(with_status(&items, ConsultationStatus::Pending).len(), 2);
        assert_eq!(with_status(&items, ConsultationStatus::Confirmed).len(), 1);
        assert_eq!(with_status(&items, ConsultationStatus::Rejected).len(), 0);
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let req = CreateConsultationRequest {
            lawyer_id: "l-7".into(),
            scheduled_at: "2026-09-01T10:00:00".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["lawyerId"], "l-7");
        assert_eq!(json["scheduledAt"], "2026-09-01T10:00:00");
    }

    #[test]
    fn status_update_request_serializes_literal() {
        let req = UpdateConsultationStatusRequest {
            status: ConsultationStatus::Confirmed,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["status"], "CONFIRMED");
    }
}

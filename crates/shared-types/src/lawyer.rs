use serde::{Deserialize, Serialize};

/// A lawyer's public practice profile as listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LawyerProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub years_of_experience: i64,
}

/// Editable subset of a lawyer profile for `PUT /lawyers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLawyerRequest {
    pub specialization: String,
    pub bio: String,
    pub hourly_rate: f64,
}

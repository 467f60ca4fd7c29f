use serde::{Deserialize, Serialize};

use crate::models::booking_models::NewConsultationBooking;

/// Body of `POST /api/consultations`, as sent by the booking form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsultationRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub help_with: String,
    #[serde(default)]
    pub current_challenges: String,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub hear_about: Option<String>,
    #[serde(default)]
    pub source_page: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i32,
    pub created_at: i32,
}

impl ConsultationRequest {
    /// Names of required fields that are empty or whitespace only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("industry", &self.industry),
            ("current_challenges", &self.current_challenges),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn into_new_booking(self, created_at: i32) -> NewConsultationBooking {
        NewConsultationBooking {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            business_name: non_blank(self.business_name),
            industry: self.industry.trim().to_string(),
            help_with: self.help_with.trim().to_string(),
            current_challenges: self.current_challenges.trim().to_string(),
            preferred_time: non_blank(self.preferred_time),
            hear_about: non_blank(self.hear_about),
            source_page: match self.source_page.trim() {
                "" => "unknown".to_string(),
                tag => tag.to_string(),
            },
            created_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

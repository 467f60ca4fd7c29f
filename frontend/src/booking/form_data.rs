use serde::{Deserialize, Serialize};

pub const INDUSTRY_OPTIONS: &[&str] = &[
    "Healthcare",
    "Real Estate",
    "Legal",
    "Finance & Accounting",
    "Retail & E-commerce",
    "Professional Services",
    "Manufacturing",
    "Education",
    "Other",
];

pub const HELP_TOPICS: &[&str] = &[
    "AI Strategy",
    "AI Automation",
    "AI Integration",
    "Custom AI Development",
    "Chatbots & Virtual Assistants",
    "Data Analytics",
    "Other",
];

pub const PREFERRED_TIMES: &[&str] = &[
    "Morning (9am - 12pm)",
    "Afternoon (12pm - 5pm)",
    "Evening (5pm - 7pm)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    BusinessName,
    Industry,
    CurrentChallenges,
    PreferredTime,
    HearAbout,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::Email => "Email",
            FormField::BusinessName => "Business name",
            FormField::Industry => "Industry",
            FormField::CurrentChallenges => "Current challenges",
            FormField::PreferredTime => "Preferred time",
            FormField::HearAbout => "How did you hear about us?",
        }
    }
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationForm {
    pub full_name: String,
    pub email: String,
    pub business_name: String,
    pub industry: String,
    pub help_with: Vec<String>, // in the order they were ticked
    pub current_challenges: String,
    pub preferred_time: String,
    pub hear_about: String,
}

/// Row sent to the lead store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPayload {
    pub full_name: String,
    pub email: String,
    pub business_name: Option<String>,
    pub industry: String,
    pub help_with: String,
    pub current_challenges: String,
    pub preferred_time: Option<String>,
    pub hear_about: Option<String>,
    pub source_page: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingReceipt {
    pub id: i32,
    pub created_at: i64,
}

impl BookingReceipt {
    /// Server timestamp as a readable UTC string, if it is in range.
    pub fn received_at(&self) -> Option<String> {
        chrono::DateTime::<chrono::Utc>::from_timestamp(self.created_at, 0)
            .map(|t| t.format("%B %-d, %Y at %H:%M UTC").to_string())
    }
}

impl ConsultationForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::BusinessName => &self.business_name,
            FormField::Industry => &self.industry,
            FormField::CurrentChallenges => &self.current_challenges,
            FormField::PreferredTime => &self.preferred_time,
            FormField::HearAbout => &self.hear_about,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::BusinessName => &mut self.business_name,
            FormField::Industry => &mut self.industry,
            FormField::CurrentChallenges => &mut self.current_challenges,
            FormField::PreferredTime => &mut self.preferred_time,
            FormField::HearAbout => &mut self.hear_about,
        };
        *slot = value;
    }

    pub fn toggle_help_topic(&mut self, topic: &str) {
        if let Some(pos) = self.help_with.iter().position(|t| t == topic) {
            self.help_with.remove(pos);
        } else {
            self.help_with.push(topic.to_string());
        }
    }

    pub fn is_selected(&self, topic: &str) -> bool {
        self.help_with.iter().any(|t| t == topic)
    }

    pub fn missing_required(&self) -> Vec<FormField> {
        [
            FormField::FullName,
            FormField::Email,
            FormField::Industry,
            FormField::CurrentChallenges,
        ]
        .into_iter()
        .filter(|field| self.value(*field).trim().is_empty())
        .collect()
    }

    pub fn help_with_joined(&self) -> String {
        self.help_with.join(", ")
    }

    pub fn to_payload(&self, source_page: &str) -> BookingPayload {
        BookingPayload {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            business_name: optional(&self.business_name),
            industry: self.industry.clone(),
            help_with: self.help_with_joined(),
            current_challenges: self.current_challenges.trim().to_string(),
            preferred_time: optional(&self.preferred_time),
            hear_about: optional(&self.hear_about),
            source_page: source_page.to_string(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

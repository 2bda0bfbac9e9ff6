use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Free-text lead attributes captured for outreach, plus the user overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadRecord {
    pub company_name: String,
    pub contact_name: String,
    pub job_title: String,
    pub email_guess: String,
    pub linkedin_url: String,
    pub company_size: String,
    pub pain_points: String,
    pub lead_score: String,
    pub score_reason: String,
    pub personalized_message: String,
}

impl LeadRecord {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::CompanyName => &self.company_name,
            LeadField::ContactName => &self.contact_name,
            LeadField::JobTitle => &self.job_title,
            LeadField::EmailGuess => &self.email_guess,
            LeadField::LinkedinUrl => &self.linkedin_url,
            LeadField::CompanySize => &self.company_size,
            LeadField::PainPoints => &self.pain_points,
            LeadField::LeadScore => &self.lead_score,
            LeadField::ScoreReason => &self.score_reason,
            LeadField::PersonalizedMessage => &self.personalized_message,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::CompanyName => &mut self.company_name,
            LeadField::ContactName => &mut self.contact_name,
            LeadField::JobTitle => &mut self.job_title,
            LeadField::EmailGuess => &mut self.email_guess,
            LeadField::LinkedinUrl => &mut self.linkedin_url,
            LeadField::CompanySize => &mut self.company_size,
            LeadField::PainPoints => &mut self.pain_points,
            LeadField::LeadScore => &mut self.lead_score,
            LeadField::ScoreReason => &mut self.score_reason,
            LeadField::PersonalizedMessage => &mut self.personalized_message,
        };
        *slot = value.into();
    }

    /// Trimmed value of the field, or `None` when it holds only whitespace.
    pub fn present(&self, field: LeadField) -> Option<&str> {
        let value = self.get(field).trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Every editable field of a [`LeadRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    CompanyName,
    ContactName,
    JobTitle,
    EmailGuess,
    LinkedinUrl,
    CompanySize,
    PainPoints,
    LeadScore,
    ScoreReason,
    PersonalizedMessage,
}

impl LeadField {
    /// Fields that feed the score, in rationale order.
    pub const REQUIRED: [LeadField; 6] = [
        LeadField::CompanyName,
        LeadField::ContactName,
        LeadField::JobTitle,
        LeadField::LinkedinUrl,
        LeadField::CompanySize,
        LeadField::PainPoints,
    ];

    pub const ALL: [LeadField; 10] = [
        LeadField::CompanyName,
        LeadField::ContactName,
        LeadField::JobTitle,
        LeadField::EmailGuess,
        LeadField::LinkedinUrl,
        LeadField::CompanySize,
        LeadField::PainPoints,
        LeadField::LeadScore,
        LeadField::ScoreReason,
        LeadField::PersonalizedMessage,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::ContactName => "Contact Name",
            Self::JobTitle => "Job Title",
            Self::EmailGuess => "Email Guess",
            Self::LinkedinUrl => "LinkedIn URL",
            Self::CompanySize => "Company Size",
            Self::PainPoints => "Pain Points",
            Self::LeadScore => "Lead Score",
            Self::ScoreReason => "Score Reason",
            Self::PersonalizedMessage => "Personalized Message",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::CompanyName => "company_name",
            Self::ContactName => "contact_name",
            Self::JobTitle => "job_title",
            Self::EmailGuess => "email_guess",
            Self::LinkedinUrl => "linkedin_url",
            Self::CompanySize => "company_size",
            Self::PainPoints => "pain_points",
            Self::LeadScore => "lead_score",
            Self::ScoreReason => "score_reason",
            Self::PersonalizedMessage => "personalized_message",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLeadField(pub String);

impl fmt::Display for UnknownLeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lead field '{}'", self.0)
    }
}

impl std::error::Error for UnknownLeadField {}

impl FromStr for LeadField {
    type Err = UnknownLeadField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        LeadField::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| UnknownLeadField(raw.to_string()))
    }
}

/// Single scoring contribution, kept so the rationale can be audited rule by rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub field: LeadField,
    pub score: i16,
    pub notes: String,
}

/// Derived projection of a [`LeadRecord`]. Recomputed from scratch, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub lead_score: u8,
    pub score_reason: String,
    pub personalized_message: String,
    pub missing_fields: Vec<&'static str>,
    pub components: Vec<ScoreComponent>,
}

use super::domain::{LeadField, LeadRecord};

pub(crate) const CALL_TO_ACTION: &str =
    "Would you be open to a 15-minute conversation next week to see if we can help accelerate your roadmap?";
pub(crate) const SIGN_OFF: &str = "Best,";
pub(crate) const SIGNATURE: &str = "Your Name";

const DEFAULT_INITIATIVE: &str = "some big initiatives";

/// Draft the outreach email body for a lead.
pub(crate) fn compose_message(record: &LeadRecord) -> String {
    let company = record.present(LeadField::CompanyName);
    let contact = record.present(LeadField::ContactName);
    let title = record.present(LeadField::JobTitle);
    let pain_points = record.present(LeadField::PainPoints);

    let greeting = match contact.and_then(|name| name.split_whitespace().next()) {
        Some(first) => format!("Hi {first},"),
        None => "Hi there,".to_string(),
    };

    let opening = match company {
        Some(company) => format!(
            "I noticed {company} is tackling {}",
            pain_points.unwrap_or(DEFAULT_INITIATIVE)
        ),
        None => match title {
            Some(title) => format!("I came across your work as {title}"),
            None => "I came across your work".to_string(),
        },
    };

    let mut lines = vec![greeting, String::new(), opening];

    if let Some(pain_points) = pain_points {
        let lowered = pain_points.to_lowercase();
        let challenge = lowered.strip_suffix('.').unwrap_or(&lowered);
        lines.push(format!(
            "Teams similar to yours solved challenges around {challenge} by streamlining their GTM workflows with our platform."
        ));
    }

    lines.push(CALL_TO_ACTION.to_string());
    lines.push(String::new());
    lines.push(SIGN_OFF.to_string());
    lines.push(SIGNATURE.to_string());

    lines.join("\n")
}

use super::super::domain::{LeadField, LeadRecord, ScoreComponent};

pub(crate) const BASE_SCORE: i16 = 25;
pub(crate) const MISSING_FIELD_PENALTY: i16 = 4;

/// Pain-point keywords and the weight each one adds when mentioned.
pub const PAIN_KEYWORD_WEIGHTS: &[(&str, i16)] = &[
    ("churn", 16),
    ("compliance", 14),
    ("conversion", 14),
    ("retention", 12),
    ("security", 12),
    ("automation", 10),
    ("integration", 10),
    ("scaling", 10),
    ("manual", 8),
    ("outdated", 8),
    ("growth", 8),
    ("slow", 6),
];

/// Title fragments that mark a decision-maker.
pub const DECISION_MAKER_PATTERNS: &[&str] = &["founder", "chief", "vp", "head", "director"];

const COMPANY_POINTS: i16 = 8;
const CONTACT_POINTS: i16 = 8;
const TITLE_POINTS: i16 = 5;
const DECISION_MAKER_BONUS: i16 = 10;
const LINKEDIN_POINTS: i16 = 6;
const QUALITATIVE_SIZE_POINTS: i16 = 6;
const GENERIC_PAIN_POINTS: i16 = 10;

pub(crate) struct ScoreSheet {
    pub components: Vec<ScoreComponent>,
    pub missing: Vec<LeadField>,
    pub total_score: i16,
}

pub(crate) fn score_record(record: &LeadRecord) -> ScoreSheet {
    let mut components = Vec::new();
    let mut missing = Vec::new();

    for field in LeadField::REQUIRED {
        match record.present(field) {
            Some(value) => components.extend(score_field(field, value)),
            None => missing.push(field),
        }
    }

    let contributions: i16 = components.iter().map(|component| component.score).sum();
    let penalty = MISSING_FIELD_PENALTY * missing.len() as i16;
    let total_score = BASE_SCORE + contributions - penalty;

    ScoreSheet {
        components,
        missing,
        total_score,
    }
}

fn score_field(field: LeadField, value: &str) -> Vec<ScoreComponent> {
    match field {
        LeadField::CompanyName => vec![component(
            field,
            COMPANY_POINTS,
            format!("{value} is identified as the target account."),
        )],
        LeadField::ContactName => vec![component(
            field,
            CONTACT_POINTS,
            format!("Primary contact {value} is known."),
        )],
        LeadField::JobTitle => vec![score_title(value)],
        LeadField::LinkedinUrl => vec![component(
            field,
            LINKEDIN_POINTS,
            "LinkedIn profile supplied for social selling.".to_string(),
        )],
        LeadField::CompanySize => vec![score_company_size(value)],
        LeadField::PainPoints => score_pain_points(value),
        _ => Vec::new(),
    }
}

pub(crate) fn is_decision_maker(title: &str) -> bool {
    let lowered = title.to_lowercase();
    DECISION_MAKER_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

fn score_title(title: &str) -> ScoreComponent {
    if is_decision_maker(title) {
        component(
            LeadField::JobTitle,
            TITLE_POINTS + DECISION_MAKER_BONUS,
            format!("{title} signals a decision-maker with buying authority."),
        )
    } else {
        component(
            LeadField::JobTitle,
            TITLE_POINTS,
            format!("{title} is a relevant title for outreach."),
        )
    }
}

/// Digits embedded anywhere in the text, read as one number. Saturates on overflow.
pub(crate) fn extract_headcount(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

fn score_company_size(raw: &str) -> ScoreComponent {
    let Some(headcount) = extract_headcount(raw) else {
        return component(
            LeadField::CompanySize,
            QUALITATIVE_SIZE_POINTS,
            format!("Company size \"{raw}\" recorded as a qualitative size."),
        );
    };

    let points = match headcount {
        n if n >= 1000 => 15,
        n if n >= 300 => 12,
        n if n >= 50 => 8,
        _ => 4,
    };
    let segment = if headcount >= 300 {
        "mid-market/enterprise"
    } else {
        "SMB"
    };

    component(
        LeadField::CompanySize,
        points,
        format!("Company size of {headcount} points to a {segment} account."),
    )
}

pub(crate) fn matched_pain_keywords(pain_points: &str) -> Vec<(&'static str, i16)> {
    let lowered = pain_points.to_lowercase();
    PAIN_KEYWORD_WEIGHTS
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .copied()
        .collect()
}

fn score_pain_points(pain_points: &str) -> Vec<ScoreComponent> {
    let matches = matched_pain_keywords(pain_points);
    if matches.is_empty() {
        return vec![component(
            LeadField::PainPoints,
            GENERIC_PAIN_POINTS,
            "Pain points captured for tailored messaging.".to_string(),
        )];
    }

    matches
        .into_iter()
        .map(|(keyword, weight)| {
            component(
                LeadField::PainPoints,
                weight,
                format!("Pain points mention {keyword} (+{weight})."),
            )
        })
        .collect()
}

fn component(field: LeadField, score: i16, notes: String) -> ScoreComponent {
    ScoreComponent {
        field,
        score,
        notes,
    }
}

use super::common::*;
use crate::workflows::leads::domain::{LeadField, LeadRecord};
use crate::workflows::leads::scoring::{InsightEngine, PAIN_KEYWORD_WEIGHTS};

const ALL_MISSING: [&str; 6] = [
    "Company Name",
    "Contact Name",
    "Job Title",
    "LinkedIn URL",
    "Company Size",
    "Pain Points",
];

fn component_total(record: &LeadRecord, field: LeadField) -> i16 {
    InsightEngine::compute(record)
        .components
        .iter()
        .filter(|component| component.field == field)
        .map(|component| component.score)
        .sum()
}

#[test]
fn empty_record_clamps_to_minimum_and_lists_every_field() {
    let insight = InsightEngine::compute(&LeadRecord::default());

    assert_eq!(insight.lead_score, 1);
    assert_eq!(insight.missing_fields, ALL_MISSING.to_vec());
    assert!(insight.components.is_empty());
    assert_eq!(
        insight.score_reason,
        format!("Missing context for: {}.", ALL_MISSING.join(", "))
    );
}

#[test]
fn complete_decision_maker_lead_scores_high() {
    let insight = InsightEngine::compute(&qualified_lead());

    // 25 + 8 + 8 + 15 + 6 + 15 + (16 + 8)
    assert_eq!(insight.lead_score, 100);
    assert!(insight.missing_fields.is_empty());
    assert!(insight
        .score_reason
        .ends_with("Key qualification fields are complete."));
}

#[test]
fn sparse_lead_applies_missing_penalty_after_contributions() {
    let insight = InsightEngine::compute(&sparse_lead());

    // 25 + 8 + 5 - 4 * 4
    assert_eq!(insight.lead_score, 22);
    assert_eq!(
        insight.missing_fields,
        vec!["Contact Name", "LinkedIn URL", "Company Size", "Pain Points"]
    );
    assert!(insight
        .score_reason
        .ends_with("Missing context for: Contact Name, LinkedIn URL, Company Size, Pain Points."));
}

#[test]
fn decision_maker_titles_earn_bonus() {
    for title in ["Co-Founder", "Chief Revenue Officer", "VP Sales", "Head of Growth", "Director, IT"] {
        let record = LeadRecord {
            job_title: title.to_string(),
            ..LeadRecord::default()
        };
        assert_eq!(component_total(&record, LeadField::JobTitle), 15, "{title}");
        assert!(InsightEngine::is_decision_maker(title));
    }

    let record = LeadRecord {
        job_title: "Account Executive".to_string(),
        ..LeadRecord::default()
    };
    assert_eq!(component_total(&record, LeadField::JobTitle), 5);
    let insight = InsightEngine::compute(&record);
    assert!(insight.score_reason.contains("relevant title"));
}

#[test]
fn company_size_tiers_follow_headcount() {
    let cases = [
        ("1500 employees", 15, "mid-market/enterprise"),
        ("1,000", 15, "mid-market/enterprise"),
        ("~300 staff", 12, "mid-market/enterprise"),
        ("50", 8, "SMB"),
        ("12 people", 4, "SMB"),
    ];

    for (size, points, segment) in cases {
        let record = LeadRecord {
            company_size: size.to_string(),
            ..LeadRecord::default()
        };
        assert_eq!(component_total(&record, LeadField::CompanySize), points, "{size}");
        assert!(InsightEngine::compute(&record).score_reason.contains(segment));
    }
}

#[test]
fn company_size_without_digits_is_qualitative() {
    let record = LeadRecord {
        company_size: "abc".to_string(),
        ..LeadRecord::default()
    };

    assert_eq!(component_total(&record, LeadField::CompanySize), 6);
    assert!(InsightEngine::compute(&record)
        .score_reason
        .contains("qualitative size"));
    assert_eq!(InsightEngine::headcount("abc"), None);
}

#[test]
fn oversized_headcount_saturates() {
    assert_eq!(
        InsightEngine::headcount("99999999999999999999999 seats"),
        Some(u64::MAX)
    );
}

#[test]
fn pain_keywords_are_summed_with_one_note_each() {
    let record = LeadRecord {
        pain_points: "High churn and manual onboarding".to_string(),
        ..LeadRecord::default()
    };

    let insight = InsightEngine::compute(&record);
    let pain_components: Vec<_> = insight
        .components
        .iter()
        .filter(|component| component.field == LeadField::PainPoints)
        .collect();

    assert_eq!(pain_components.len(), 2);
    assert_eq!(component_total(&record, LeadField::PainPoints), 24);
    assert!(pain_components[0].notes.contains("churn"));
    assert!(pain_components[1].notes.contains("manual"));
    assert_eq!(
        InsightEngine::pain_keyword_matches("High CHURN and Manual onboarding"),
        vec![("churn", 16), ("manual", 8)]
    );
}

#[test]
fn pain_points_without_keywords_get_flat_credit() {
    let record = LeadRecord {
        pain_points: "Board wants a new pipeline dashboard".to_string(),
        ..LeadRecord::default()
    };

    assert_eq!(component_total(&record, LeadField::PainPoints), 10);
}

#[test]
fn keyword_table_is_ordered_by_weight() {
    assert_eq!(PAIN_KEYWORD_WEIGHTS.len(), 12);
    assert!(PAIN_KEYWORD_WEIGHTS
        .windows(2)
        .all(|pair| pair[0].1 >= pair[1].1));
}

#[test]
fn whitespace_only_fields_count_as_missing() {
    let record = LeadRecord {
        company_name: "   ".to_string(),
        ..LeadRecord::default()
    };

    assert_eq!(InsightEngine::missing_fields(&record), ALL_MISSING.to_vec());
}

#[test]
fn score_never_drops_when_a_required_field_is_filled() {
    let full = qualified_lead();
    let mut record = LeadRecord::default();
    let mut previous = InsightEngine::compute(&record).lead_score;

    for field in LeadField::REQUIRED {
        record.set(field, full.get(field));
        let score = InsightEngine::compute(&record).lead_score;
        assert!(score >= previous, "{field} lowered score {previous} -> {score}");
        assert!((1..=100).contains(&score));
        previous = score;
    }
}

#[test]
fn overrides_do_not_feed_back_into_scoring() {
    let mut record = sparse_lead();
    let baseline = InsightEngine::compute(&record);

    record.lead_score = "99".to_string();
    record.score_reason = "Hand-qualified at trade show".to_string();
    record.personalized_message = "Custom note".to_string();
    record.email_guess = "ops@globex.com".to_string();

    assert_eq!(InsightEngine::compute(&record), baseline);
}

#[test]
fn compute_is_idempotent() {
    let record = qualified_lead();
    assert_eq!(InsightEngine::compute(&record), InsightEngine::compute(&record));
}

//! End-to-end behavior of the lead workflow through the public crate surface: email guessing,
//! scoring, rationale, templated outreach, and override precedence.

use lead_insight::workflows::leads::{
    guess_email, InsightEngine, LeadField, LeadRecord, LeadSession, LeadWorkflow, ValueSource,
};

fn record(fields: &[(LeadField, &str)]) -> LeadRecord {
    let mut record = LeadRecord::default();
    for (field, value) in fields {
        record.set(*field, *value);
    }
    record
}

#[test]
fn email_guesses_match_documented_examples() {
    assert_eq!(guess_email("", ""), "");
    assert_eq!(guess_email("Jane Doe", "Acme Inc"), "jane.doe@acme.com");
    assert_eq!(guess_email("Cher", "Acme"), "cher@acme.com");
}

#[test]
fn evaluation_guesses_email_before_scoring() {
    let lead = record(&[
        (LeadField::ContactName, "Jane Doe"),
        (LeadField::CompanyName, "Acme Inc"),
    ]);

    let evaluation = LeadWorkflow::evaluate(&lead);

    assert_eq!(evaluation.email.value, "jane.doe@acme.com");
    assert_eq!(evaluation.email.source, ValueSource::Computed);
    assert_eq!(evaluation.insight, InsightEngine::compute(&lead));
}

#[test]
fn explicit_email_override_skips_guessing() {
    let lead = record(&[
        (LeadField::ContactName, "Jane Doe"),
        (LeadField::CompanyName, "Acme Inc"),
        (LeadField::EmailGuess, "jane@acme.co.uk"),
    ]);

    let evaluation = LeadWorkflow::evaluate(&lead);

    assert_eq!(evaluation.email.value, "jane@acme.co.uk");
    assert_eq!(evaluation.email.source, ValueSource::Override);
}

#[test]
fn enterprise_size_and_qualitative_size_contribute_expected_points() {
    let enterprise = InsightEngine::compute(&record(&[(LeadField::CompanySize, "1500 employees")]));
    let qualitative = InsightEngine::compute(&record(&[(LeadField::CompanySize, "abc")]));

    // Base 25, five missing fields at 4 points each.
    assert_eq!(enterprise.lead_score, 25 + 15 - 20);
    assert!(enterprise.score_reason.contains("mid-market/enterprise"));
    assert_eq!(qualitative.lead_score, 25 + 6 - 20);
    assert!(qualitative.score_reason.contains("qualitative size"));
}

#[test]
fn scores_stay_in_bounds_for_assorted_records() {
    let samples = [
        record(&[]),
        record(&[(LeadField::PainPoints, "churn compliance conversion retention security automation integration scaling manual outdated growth slow")]),
        record(&[(LeadField::CompanySize, "0")]),
        record(&[(LeadField::JobTitle, "   ")]),
        record(&[
            (LeadField::CompanyName, "Ünïcødé GmbH"),
            (LeadField::ContactName, "Zoë Ångström"),
        ]),
    ];

    for sample in &samples {
        let insight = InsightEngine::compute(sample);
        assert!((1..=100).contains(&insight.lead_score), "{sample:?}");
        assert!(insight.personalized_message.ends_with("Best,\nYour Name"));
    }
}

#[test]
fn missing_fields_track_exactly_the_empty_required_fields() {
    let lead = record(&[
        (LeadField::ContactName, "Cher"),
        (LeadField::LinkedinUrl, "https://linkedin.com/in/cher"),
        (LeadField::PainPoints, "Growth"),
    ]);

    let insight = InsightEngine::compute(&lead);

    assert_eq!(
        insight.missing_fields,
        vec!["Company Name", "Job Title", "Company Size"]
    );
    assert!(insight
        .score_reason
        .ends_with("Missing context for: Company Name, Job Title, Company Size."));
}

#[test]
fn session_display_prefers_overrides_without_rescoring() {
    let mut session = LeadSession::new();
    session.set_field(LeadField::CompanyName, "Acme Inc");
    session.set_field(LeadField::ContactName, "Jane Doe");
    let computed_score = session.evaluation().insight.lead_score;

    session.set_field(LeadField::LeadScore, "95");
    session.set_field(LeadField::ScoreReason, "Referred by the CEO");
    let display = session.display();

    assert_eq!(display.lead_score.value, "95");
    assert_eq!(display.score_reason.value, "Referred by the CEO");
    assert_eq!(session.evaluation().insight.lead_score, computed_score);

    session.reset();
    assert_eq!(session.record(), &LeadRecord::default());
    assert_eq!(session.display().lead_score.value, "1");
}

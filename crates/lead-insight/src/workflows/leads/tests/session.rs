use crate::workflows::leads::domain::LeadField;
use crate::workflows::leads::views::ValueSource;
use crate::workflows::leads::LeadSession;

#[test]
fn edits_recompute_and_reset_restores_empty_state() {
    let mut session = LeadSession::new();
    assert_eq!(session.evaluation().insight.lead_score, 1);

    session.set_field(LeadField::ContactName, "Jane Doe");
    session.set_field(LeadField::CompanyName, "Acme Inc");
    let evaluation = session.evaluation();
    assert_eq!(evaluation.email.value, "jane.doe@acme.com");
    assert_eq!(evaluation.email.source, ValueSource::Computed);
    assert_eq!(evaluation.insight.lead_score, 25 + 8 + 8 - 4 * 4);

    session.reset();
    let evaluation = session.evaluation();
    assert!(evaluation.email.value.is_empty());
    assert_eq!(evaluation.insight.missing_fields.len(), 6);
}

#[test]
fn unchanged_record_reuses_cached_evaluation() {
    let mut session = LeadSession::new();
    session.set_field(LeadField::CompanyName, "Initech");
    session.evaluation();
    let first = session.cached_fingerprint();

    session.evaluation();
    assert_eq!(session.cached_fingerprint(), first);

    session.set_field(LeadField::CompanySize, "80");
    session.evaluation();
    assert_ne!(session.cached_fingerprint(), first);
}

#[test]
fn overrides_take_display_precedence() {
    let mut session = LeadSession::new();
    session.set_field(LeadField::ContactName, "Jane Doe");
    session.set_field(LeadField::CompanyName, "Acme");
    session.set_field(LeadField::EmailGuess, "jd@acme.io");
    session.set_field(LeadField::LeadScore, "88");

    let display = session.display();
    assert_eq!(display.email.value, "jd@acme.io");
    assert!(display.email.is_override());
    assert_eq!(display.lead_score.value, "88");
    assert_eq!(display.lead_score.source, ValueSource::Override);
    assert_eq!(display.score_reason.source, ValueSource::Computed);
    assert!(display
        .personalized_message
        .value
        .ends_with("Best,\nYour Name"));
    assert_eq!(session.evaluation().insight.lead_score, 25 + 8 + 8 - 4 * 4);
}

#[test]
fn blank_override_falls_back_to_computed_value() {
    let mut session = LeadSession::new();
    session.set_field(LeadField::ContactName, "Cher");
    session.set_field(LeadField::CompanyName, "Acme");
    session.set_field(LeadField::EmailGuess, "   ");

    let display = session.display();
    assert_eq!(display.email.value, "cher@acme.com");
    assert_eq!(display.email.source, ValueSource::Computed);
}

#[test]
fn field_names_parse_from_wire_keys() {
    assert_eq!("company_name".parse::<LeadField>(), Ok(LeadField::CompanyName));
    assert_eq!("LinkedIn-URL".parse::<LeadField>(), Ok(LeadField::LinkedinUrl));
    assert!("budget".parse::<LeadField>().is_err());
}

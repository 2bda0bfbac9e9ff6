use clap::Args;
use lead_insight::error::AppError;
use lead_insight::workflows::leads::{
    LeadBatchReport, LeadCsvImporter, LeadDisplay, LeadField, LeadSession,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct LeadScoreArgs {
    /// Company the contact works for
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Contact full name
    #[arg(long)]
    pub(crate) contact: Option<String>,
    /// Contact job title
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Known email address; skips the guess
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// LinkedIn profile URL
    #[arg(long)]
    pub(crate) linkedin: Option<String>,
    /// Company size, e.g. "1500 employees" or "enterprise"
    #[arg(long)]
    pub(crate) size: Option<String>,
    /// Free-text pain points
    #[arg(long)]
    pub(crate) pain_points: Option<String>,
    /// Print the per-rule score breakdown
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LeadImportArgs {
    /// CSV export with one lead per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the outreach draft for every lead
    #[arg(long)]
    pub(crate) messages: bool,
}

pub(crate) fn run_lead_score(args: LeadScoreArgs) {
    let LeadScoreArgs {
        company,
        contact,
        title,
        email,
        linkedin,
        size,
        pain_points,
        breakdown,
    } = args;

    let mut session = LeadSession::new();
    let inputs = [
        (LeadField::CompanyName, company),
        (LeadField::ContactName, contact),
        (LeadField::JobTitle, title),
        (LeadField::EmailGuess, email),
        (LeadField::LinkedinUrl, linkedin),
        (LeadField::CompanySize, size),
        (LeadField::PainPoints, pain_points),
    ];
    for (field, value) in inputs {
        if let Some(value) = value {
            session.set_field(field, value);
        }
    }

    let display = session.display();
    render_lead(&display);

    if breakdown {
        println!("\nScore breakdown");
        for component in &session.evaluation().insight.components {
            println!(
                "- {}: {:+} ({})",
                component.field.label(),
                component.score,
                component.notes
            );
        }
    }
}

pub(crate) fn run_lead_import(args: LeadImportArgs) -> Result<(), AppError> {
    let records = LeadCsvImporter::from_path(&args.csv)?;
    let report = LeadBatchReport::from_records(&records);

    println!("Lead import: {}", args.csv.display());
    let summary = &report.summary;
    println!(
        "- {} leads | average score {:.1} | {} high priority",
        summary.total, summary.average_score, summary.high_priority
    );

    let gaps: Vec<String> = summary
        .missing_field_counts
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| format!("{} ({})", entry.field, entry.count))
        .collect();
    if gaps.is_empty() {
        println!("- No missing fields");
    } else {
        println!("- Gaps: {}", gaps.join(", "));
    }

    println!("\nRanked leads");
    for entry in report.ranked() {
        let name = if entry.contact_name.is_empty() {
            "(unknown contact)"
        } else {
            entry.contact_name.as_str()
        };
        let email = if entry.display.email.value.is_empty() {
            "no email"
        } else {
            entry.display.email.value.as_str()
        };
        println!(
            "- row {} | {} | {} | {} | score {}",
            entry.row, name, entry.company_name, email, entry.lead_score
        );
    }

    if args.messages {
        for entry in &report.entries {
            println!("\n--- row {} ---", entry.row);
            println!("{}", entry.display.personalized_message.value);
        }
    }

    Ok(())
}

pub(crate) fn render_lead(display: &LeadDisplay) {
    let email = if display.email.value.is_empty() {
        "(no usable guess)"
    } else {
        display.email.value.as_str()
    };

    println!("Lead insight");
    println!("Email: {} [{}]", email, display.email.source.label());
    println!(
        "Lead score: {} [{}]",
        display.lead_score.value,
        display.lead_score.source.label()
    );
    println!("\nWhy this score");
    println!("{}", display.score_reason.value);

    if !display.missing_fields.is_empty() {
        println!("\nMissing fields");
        for label in &display.missing_fields {
            println!("- {}", label);
        }
    }

    println!("\nOutreach draft");
    println!("{}", display.personalized_message.value);
}

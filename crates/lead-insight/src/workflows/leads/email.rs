//! Best-effort work email guessing from a contact and company name.

/// Corporate suffixes dropped from the end of the compacted company name.
const CORPORATE_SUFFIXES: &[&str] = &["inc", "llc", "ltd", "corp", "co"];

const FALLBACK_DOMAIN: &str = "example";

/// Guess `first.last@company.com` for a lead. Returns an empty string when no
/// usable guess exists; partial guesses are never produced.
pub fn guess_email(contact_name: &str, company_name: &str) -> String {
    if contact_name.is_empty() && company_name.is_empty() {
        return String::new();
    }

    let tokens = name_tokens(contact_name);
    let first = tokens.first().map(String::as_str).unwrap_or_default();
    let last = if tokens.len() > 1 {
        tokens.last().map(String::as_str).unwrap_or_default()
    } else {
        ""
    };

    let compact = compact_company(company_name);
    if first.is_empty() || compact.is_empty() {
        return String::new();
    }

    let handle = if last.is_empty() {
        first.to_string()
    } else {
        format!("{first}.{last}")
    };

    let domain = strip_corporate_suffix(&compact);
    let domain = if domain.is_empty() {
        FALLBACK_DOMAIN
    } else {
        domain
    };

    format!("{handle}@{domain}.com")
}

fn name_tokens(contact_name: &str) -> Vec<String> {
    let cleaned: String = contact_name
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

fn compact_company(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

fn strip_corporate_suffix(compact: &str) -> &str {
    CORPORATE_SUFFIXES
        .iter()
        .find_map(|suffix| compact.strip_suffix(suffix))
        .unwrap_or(compact)
        .trim()
}

/// Strip BOM and zero-width characters and collapse runs of whitespace.
pub(crate) fn normalize_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join name parts that are present, separated by single spaces.
pub(crate) fn join_name(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|part| normalize_cell(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

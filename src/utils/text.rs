//! Text normalization shared by the normalizer, the person filter and every
//! join between the journal and the absence file.

use unicode_normalization::UnicodeNormalization;

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// NFKC + trim + case folding. Used for marker and token matching.
pub fn fold(s: &str) -> String {
    s.nfkc().collect::<String>().trim().to_lowercase()
}

/// Canonical identity key for a person name.
///
/// NFKC, `ё`/`Ё` folded to `е`/`Е`, whitespace collapsed, lower case.
/// Every place that compares names across sources must go through this.
pub fn person_key(name: &str) -> String {
    let normalized: String = name
        .nfkc()
        .map(|c| match c {
            'ё' => 'е',
            'Ё' => 'Е',
            other => other,
        })
        .collect();

    collapse_ws(&normalized).to_lowercase()
}

/// Join name parts, skipping empty ones.
pub fn join_name<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    collapse_ws(&joined)
}

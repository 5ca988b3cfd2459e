//! Drops badges that do not belong to real employees.

use crate::config::Rules;
use crate::models::access_event::AccessEvent;
use crate::utils::text::fold;
use regex::Regex;
use std::sync::LazyLock;

// Unicode decimal digits (Nd); other numerals such as `ↀ` do not count.
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// True when `name` looks like a cleaning crew, a contractor, an
/// organisational badge, an intern or an excluded alias.
pub fn is_nonperson(name: &str, rules: &Rules) -> bool {
    let s = fold(name);

    if s.is_empty() {
        return true;
    }
    if rules.excluded_aliases.iter().any(|a| s.contains(a.as_str())) {
        return true;
    }
    if rules.nonperson_tokens.iter().any(|t| s.contains(t.as_str())) {
        return true;
    }
    if let Some(re) = &rules.whole_word_tokens
        && re.is_match(&s)
    {
        return true;
    }

    DIGIT.is_match(&s)
}

/// Keep only events of real people; returns how many were dropped.
pub fn retain_people(events: &mut Vec<AccessEvent>, rules: &Rules) -> usize {
    let before = events.len();
    events.retain(|e| !is_nonperson(&e.person, rules));
    before - events.len()
}

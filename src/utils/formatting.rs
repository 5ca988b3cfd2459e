//! Formatting utilities used for CLI and export outputs.

/// Minutes → `"{h}h {m}min"`. Negative values are shown as zero.
pub fn fmt_hm(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h {}min", m / 60, m % 60)
}

/// Like [`fmt_hm`] but blank for zero, used for the shortfall column.
pub fn fmt_hm_nonzero(mins: i64) -> String {
    if mins > 0 { fmt_hm(mins) } else { String::new() }
}

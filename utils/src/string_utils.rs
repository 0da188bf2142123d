use std::collections::BTreeSet;

/// Split a comma-separated list into a set, trimming items and dropping empty ones.
pub fn parse_csv_set(s: &str) -> BTreeSet<String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

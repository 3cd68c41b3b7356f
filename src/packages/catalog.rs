//! Line-oriented parsing of `brew search` output.

/// Extract cask identifiers from raw search output: the first
/// whitespace-delimited token of each non-empty line, in line order.
/// Lines with trailing annotations contribute their first token only.
pub fn parse_search_output(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|token| token.to_string())
        .collect()
}

/// Returns the last `limit` lines of `text` containing `marker`, oldest first.
///
/// Matching is a plain substring test, the same as `grep -F`. Trailing `\r`
/// is stripped so CRLF streams compare equal to LF ones.
pub fn tail_matching<'a>(text: &'a str, marker: &str, limit: usize) -> Vec<&'a str> {
    let matches: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| line.contains(marker))
        .collect();
    let skip = matches.len().saturating_sub(limit);
    matches.into_iter().skip(skip).collect()
}

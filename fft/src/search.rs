use crate::Entry;

pub const MAX_MATCHES: usize = 5;

/// Indices of entries whose name contains `pattern`, ignoring case, capped at [`MAX_MATCHES`].
pub fn find_matches(entries: &[Entry], pattern: &str) -> Vec<usize> {
  let pattern = pattern.to_lowercase();
  entries
    .iter()
    .enumerate()
    .filter(|(_, entry)| entry.name.to_lowercase().contains(&pattern))
    .map(|(index, _)| index)
    .take(MAX_MATCHES)
    .collect()
}

use crate::models::Entry;

/// Entries whose name, symptoms or water label contain `query`, ignoring case.
///
/// An empty query keeps every entry. Order is preserved.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.search_text().contains(&needle))
        .collect()
}

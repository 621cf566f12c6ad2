/// Separator placed between two entries sharing a page.
pub const SEPARATOR: &str = "\n";

/// Splits `entries` into pages of at most `max_size` characters.
///
/// Entries are never split. An entry longer than `max_size` gets a page of its
/// own instead of being truncated. An empty input still yields one empty page.
pub fn paginate<S: AsRef<str>>(entries: &[S], max_size: usize) -> Vec<String> {
    let separator_len = SEPARATOR.chars().count();

    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut has_entries = false;

    for entry in entries {
        let entry = entry.as_ref();
        let entry_len = entry.chars().count();

        if has_entries && current_len + separator_len + entry_len > max_size {
            pages.push(std::mem::take(&mut current));
            current_len = 0;
            has_entries = false;
        }

        if has_entries {
            current.push_str(SEPARATOR);
            current_len += separator_len;
        }

        current.push_str(entry);
        current_len += entry_len;
        has_entries = true;
    }

    if has_entries || pages.is_empty() {
        pages.push(current);
    }

    pages
}

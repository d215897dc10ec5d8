use crate::core::types::{DirectoryEntry, EntryKind, EntryList};
use crate::library::natsort::natural_sort_by_key;

/// Split an `ls -F` line into its name and the kind named by its marker.
///
/// Only the three markers `/`, `@` and `*` are recognised. Anything else,
/// including the `|` and `=` some shells append to fifos and sockets, is
/// part of the name.
pub fn classify(raw_line: &str) -> DirectoryEntry {
    let kind = match raw_line.chars().last() {
        Some('/') => EntryKind::Directory,
        Some('@') => EntryKind::Symlink,
        Some('*') => EntryKind::Executable,
        _ => return DirectoryEntry::new(raw_line, EntryKind::File),
    };

    // All markers are one byte
    DirectoryEntry::new(&raw_line[..raw_line.len() - 1], kind)
}

/// Raw lines of a listing: carriage returns removed, trailing empty line
/// dropped.
pub fn listing_lines(stdout: &str) -> Vec<String> {
    let cleaned = stdout.replace('\r', "");
    let mut lines: Vec<String> = cleaned.split('\n').map(String::from).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Classify every line and order the result naturally, ignoring case.
pub fn parse_listing(stdout: &str) -> EntryList {
    let mut entries: EntryList = listing_lines(stdout)
        .iter()
        .map(|line| classify(line))
        .collect();
    natural_sort_by_key(&mut entries, |entry| entry.name.as_str());
    entries
}

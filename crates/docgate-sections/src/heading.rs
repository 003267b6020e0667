use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Marker that opens a level-2 heading.
const H2_MARKER: &str = "##";

/// Normalized heading label used as the comparison key.
///
/// Lowercased, with surrounding whitespace and any trailing run of `#`
/// removed. Two headings with the same canonical form are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalHeading(String);

impl CanonicalHeading {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CanonicalHeading {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Normalize a heading body or a required section name.
///
/// Returns `None` when nothing is left after stripping; such labels are
/// dropped rather than reported.
pub fn canonicalize(name: &str) -> Option<CanonicalHeading> {
    let stripped = name.trim().trim_end_matches('#').trim();
    if stripped.is_empty() {
        return None;
    }
    Some(CanonicalHeading(stripped.to_lowercase()))
}

/// Number of leading `#` characters on a line, ignoring surrounding whitespace.
pub fn heading_level(line: &str) -> usize {
    line.trim().bytes().take_while(|b| *b == b'#').count()
}

/// Collect the canonical form of every level-2 heading in `text`.
///
/// Lines opening with three or more `#` are deeper headings and never match.
/// Duplicates collapse into one entry.
pub fn extract_h2_sections(text: &str) -> BTreeSet<CanonicalHeading> {
    text.lines()
        .filter(|line| heading_level(line) == 2)
        .filter_map(|line| {
            let body = line.trim().strip_prefix(H2_MARKER)?;
            canonicalize(body)
        })
        .collect()
}

use std::collections::BTreeSet;
use std::path::Path;

use crate::heading::{canonicalize, extract_h2_sections, CanonicalHeading};

/// Outcome of a required-section check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVerdict {
    /// Required headings that were not found, in canonical form.
    pub missing: BTreeSet<CanonicalHeading>,
    /// False when the document could not be read at all.
    pub readable: bool,
}

impl SectionVerdict {
    /// An unreadable document never passes, whatever was required.
    pub fn is_valid(&self) -> bool {
        self.readable && self.missing.is_empty()
    }
}

/// Compare extracted headings against the required names.
///
/// Required names are canonicalized first, so the check ignores case,
/// surrounding whitespace and trailing `#`.
pub fn validate_sections<S: AsRef<str>>(
    found: &BTreeSet<CanonicalHeading>,
    expected: &[S],
) -> SectionVerdict {
    let missing = normalize_expected(expected)
        .into_iter()
        .filter(|heading| !found.contains(heading))
        .collect();
    SectionVerdict {
        missing,
        readable: true,
    }
}

/// Check a Markdown file on disk for the required level-2 sections.
///
/// A file that cannot be read is treated as having no sections at all and
/// is never valid.
pub fn validate_markdown_file<S: AsRef<str>>(path: &Path, expected: &[S]) -> SectionVerdict {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let found = extract_h2_sections(&text);
            tracing::debug!(
                path = %path.display(),
                found = found.len(),
                "extracted level-2 headings"
            );
            validate_sections(&found, expected)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "markdown file unreadable");
            SectionVerdict {
                missing: normalize_expected(expected),
                readable: false,
            }
        }
    }
}

fn normalize_expected<S: AsRef<str>>(expected: &[S]) -> BTreeSet<CanonicalHeading> {
    expected
        .iter()
        .filter_map(|name| canonicalize(name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn found(names: &[&str]) -> BTreeSet<CanonicalHeading> {
        names.iter().filter_map(|name| canonicalize(name)).collect()
    }

    fn missing(verdict: &SectionVerdict) -> Vec<&str> {
        verdict.missing.iter().map(CanonicalHeading::as_str).collect()
    }

    #[test]
    fn reports_missing_case_insensitively() {
        let verdict = validate_sections(&found(&["overview", "details"]), &["Overview", "Summary"]);
        assert!(!verdict.is_valid());
        assert_eq!(missing(&verdict), vec!["summary"]);
    }

    #[test]
    fn all_present_is_valid() {
        let verdict = validate_sections(
            &found(&["overview", "details", "summary"]),
            &["overview", "DETAILS"],
        );
        assert!(verdict.is_valid());
        assert!(verdict.missing.is_empty());
    }

    #[test]
    fn empty_expected_is_always_valid() {
        let none: [&str; 0] = [];
        assert!(validate_sections(&BTreeSet::new(), &none).is_valid());
    }

    #[test]
    fn trailing_hashes_in_expected_are_ignored() {
        let verdict = validate_sections(&found(&["summary"]), &["Summary ##", "  SUMMARY "]);
        assert!(verdict.is_valid());
    }

    #[test]
    fn missing_file_reports_every_section() {
        let verdict = validate_markdown_file(Path::new("/path/does/not/exist.md"), &["any"]);
        assert!(!verdict.is_valid());
        assert!(!verdict.readable);
        assert_eq!(missing(&verdict), vec!["any"]);
    }

    #[test]
    fn missing_file_fails_without_required_names() {
        let none: [&str; 0] = [];
        let verdict = validate_markdown_file(Path::new("/nope/missing.md"), &none);
        assert!(!verdict.is_valid());
        assert!(verdict.missing.is_empty());
    }

    #[test]
    fn missing_file_fails_with_blank_required_names() {
        let verdict = validate_markdown_file(Path::new("/nope/missing.md"), &["  ", "##"]);
        assert!(!verdict.is_valid());
        assert!(verdict.missing.is_empty());
    }

    #[test]
    fn reads_sections_from_file() {
        let path = temp_markdown("reads-file", "# T\n\n## Overview\n### Deep\n## Summary ###\n");

        let ok = validate_markdown_file(&path, &["overview", "summary"]);
        assert!(ok.is_valid());
        assert!(ok.readable);

        let bad = validate_markdown_file(&path, &["overview", "bogus", "deep"]);
        assert_eq!(missing(&bad), vec!["bogus", "deep"]);

        let _ = std::fs::remove_file(&path);
    }

    fn temp_markdown(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "docgate-sections-{tag}-{}-{}.md",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }
}

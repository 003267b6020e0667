//! Required-section checks for Markdown documents.
//!
//! Only level-2 headings (`## Name`) are considered. Headings and required
//! names are compared in canonical form: lowercased, trimmed, with any
//! trailing `#` run removed.

pub mod heading;
pub mod verdict;

pub use heading::{canonicalize, extract_h2_sections, heading_level, CanonicalHeading};
pub use verdict::{validate_markdown_file, validate_sections, SectionVerdict};

//! Documentation and config quality gates.
//!
//! docgate bundles two independent checks meant for CI pipelines:
//!
//! - [`sections`] — confirm a Markdown document has a required set of
//!   level-2 headings
//! - [`schema`] — confirm a YAML document conforms to a JSON Schema, with
//!   every violation reported in stable sorted order
//!
//! The `validate-markdown` and `validate-yaml` binaries (behind the default
//! `cli` feature) wrap these checks and exit 0 on pass, 1 on failure.

/// Re-export section check types.
pub mod sections {
    pub use docgate_sections::*;
}

/// Re-export schema check types.
pub mod schema {
    pub use docgate_schema::*;
}

/// Shared plumbing for the bundled binaries.
#[cfg(feature = "cli")]
#[doc(hidden)]
pub mod cli;

//! Serializable projections of a [`DocumentRecord`](crate::DocumentRecord).
//!
//! These are the only outward format of the analysis stage; storage and
//! delivery stages consume them as JSON or any other serde format.

use serde::{Deserialize, Serialize};

/// Short summary used for listings and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Relevancy score in `[0, 3]`.
    pub relevancy: u8,

    /// Trimmed page title, empty when the page has none.
    pub title: String,
}

/// Complete, self-contained record for transport after the DOM is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPackage {
    /// Relevancy score in `[0, 3]`.
    pub relevancy: u8,

    /// Source location of the page.
    pub uri: String,

    /// Trimmed page title.
    pub title: String,

    /// URL-safe token derived from the title.
    pub slug: String,

    /// Plain text of the content block; `None` when no block was found.
    pub text: Option<String>,

    /// Cleaned HTML of the content block; `None` when no block was found.
    pub html: Option<String>,

    /// Outer HTML of `<body>`, or a diagnostic sentinel when the body
    /// could not be located. Always present.
    pub raw: String,
}

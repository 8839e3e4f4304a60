//! Configuration options for document analysis.
//!
//! The `Options` struct is the read-only map of named options consulted while
//! a record is built. It deserializes from JSON, with absent keys falling back
//! to their defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration options for document analysis.
///
/// # Example
///
/// ```rust
/// use spider_document::Options;
///
/// let options = Options {
///     save_document: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_candidate_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Persist the selected content block through the cache collaborator.
    ///
    /// Default: `false`
    pub save_document: bool,

    /// Minimum owned text (non-whitespace characters) for a container candidate.
    ///
    /// Default: `50`
    pub min_candidate_size: usize,

    /// Maximum share of a candidate's text that may sit inside links.
    ///
    /// Blocks above this ratio are treated as navigation.
    ///
    /// Default: `0.5`
    pub max_link_density: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            save_document: false,
            min_candidate_size: 50,
            max_link_density: 0.5,
        }
    }
}

impl Options {
    /// Parse options from a JSON object of named options.
    ///
    /// ```rust
    /// use spider_document::Options;
    ///
    /// let options = Options::from_json(r#"{"save_document": true}"#)?;
    /// assert!(options.save_document);
    /// assert_eq!(options.min_candidate_size, 50);
    /// # Ok::<(), spider_document::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

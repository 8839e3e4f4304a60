//! Subscriber keyword preferences.
//!
//! A subscription exposes two optional keyword filters, `contain` and
//! `notContain`. `None` means the subscriber set no constraint.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The filters a subscription can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Keywords the subscriber wants to see.
    Contain,
    /// Keywords the subscriber wants to avoid.
    NotContain,
}

impl FilterKind {
    /// Both filter kinds, in scoring order.
    pub const ALL: [FilterKind; 2] = [FilterKind::Contain, FilterKind::NotContain];

    /// Filter name as used by subscription stores.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Contain => "contain",
            FilterKind::NotContain => "notContain",
        }
    }

    /// Look a filter up by its store name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "contain" => Some(FilterKind::Contain),
            "notContain" => Some(FilterKind::NotContain),
            _ => None,
        }
    }
}

/// Read-only access to a subscriber's keyword filters.
pub trait Subscription: Sync {
    /// The keywords configured for `kind`, or `None` when unset.
    fn filter(&self, kind: FilterKind) -> Option<&BTreeSet<String>>;

    /// The filter with the given store name; unknown names have no filter.
    fn filter_by_name(&self, name: &str) -> Option<&BTreeSet<String>> {
        FilterKind::from_name(name).and_then(|kind| self.filter(kind))
    }
}

/// Check that every configured keyword can be matched.
///
/// A blank keyword would match (or fail to match) every document, which
/// makes the subscription structurally invalid.
pub fn validate(subscription: &dyn Subscription) -> Result<()> {
    for kind in FilterKind::ALL {
        if let Some(keywords) = subscription.filter(kind) {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::InvalidSubscription(format!(
                    "filter '{}' contains a blank keyword",
                    kind.name()
                )));
            }
        }
    }
    Ok(())
}

/// Plain in-memory subscription.
///
/// # Example
///
/// ```rust
/// use spider_document::{FilterKind, KeywordSubscription, Subscription};
///
/// let sub = KeywordSubscription::new()
///     .with_contain(["rust", "crawler"])
///     .with_not_contain(["casino"]);
/// assert_eq!(sub.filter(FilterKind::Contain).map(|f| f.len()), Some(2));
/// assert!(sub.filter_by_name("notContain").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSubscription {
    /// Desired keywords.
    #[serde(default)]
    pub contain: Option<BTreeSet<String>>,
    /// Undesired keywords.
    #[serde(default)]
    pub not_contain: Option<BTreeSet<String>>,
}

impl KeywordSubscription {
    /// A subscription with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the desired keywords.
    #[must_use]
    pub fn with_contain<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contain = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Set the undesired keywords.
    #[must_use]
    pub fn with_not_contain<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_contain = Some(keywords.into_iter().map(Into::into).collect());
        self
    }
}

impl Subscription for KeywordSubscription {
    fn filter(&self, kind: FilterKind) -> Option<&BTreeSet<String>> {
        match kind {
            FilterKind::Contain => self.contain.as_ref(),
            FilterKind::NotContain => self.not_contain.as_ref(),
        }
    }
}

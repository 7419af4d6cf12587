//! Entity resolution by free-text substring.
//!
//! A needle matches an entity when it is contained, case-insensitively, in
//! the entity's id or name. Resolution succeeds only for exactly one match;
//! callers never get a guess.

use crate::error::ApiError;
use crate::model::{Cluster, Job, SqlDashboard, SqlQuery};
use std::borrow::Cow;

/// Anything with an id and a display name.
pub trait Identified {
    /// Singular noun used in status lines and errors ("cluster", "job", ...).
    const KIND: &'static str;

    fn id(&self) -> Cow<'_, str>;
    fn name(&self) -> &str;
}

impl Identified for Cluster {
    const KIND: &'static str = "cluster";

    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for Job {
    const KIND: &'static str = "job";

    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for SqlQuery {
    const KIND: &'static str = "query";

    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for SqlDashboard {
    const KIND: &'static str = "dashboard";

    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of resolving a needle against a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    NotFound,
    Ambiguous(usize),
}

impl<T> Resolution<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Convert into a command-level result, naming the entity kind in errors.
    pub fn into_result(self, kind: &'static str, needle: &str) -> Result<T, ApiError> {
        match self {
            Resolution::Found(entity) => Ok(entity),
            Resolution::NotFound => Err(ApiError::NotFound {
                kind,
                needle: needle.to_string(),
            }),
            Resolution::Ambiguous(count) => Err(ApiError::Ambiguous {
                kind,
                needle: needle.to_string(),
                count,
            }),
        }
    }
}

impl<T: Clone> Resolution<&T> {
    /// Owned copy of the resolved entity.
    pub fn cloned(self) -> Resolution<T> {
        match self {
            Resolution::Found(entity) => Resolution::Found(entity.clone()),
            Resolution::NotFound => Resolution::NotFound,
            Resolution::Ambiguous(count) => Resolution::Ambiguous(count),
        }
    }
}

/// Case-insensitive containment of `needle` in `haystack`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when `needle` occurs in the entity's id or name.
pub fn matches<T: Identified>(entity: &T, needle: &str) -> bool {
    contains_ignore_case(&entity.id(), needle) || contains_ignore_case(entity.name(), needle)
}

/// Every entity matching `needle`, in listing order.
pub fn find_all<'a, T: Identified>(entities: &'a [T], needle: &str) -> Vec<&'a T> {
    entities.iter().filter(|e| matches(*e, needle)).collect()
}

/// Resolve `needle` to exactly one entity.
///
/// An empty needle matches everything, so it only resolves when the listing
/// holds a single entity.
pub fn resolve<'a, T: Identified>(entities: &'a [T], needle: &str) -> Resolution<&'a T> {
    let mut found = find_all(entities, needle);
    match found.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(found.remove(0)),
        n => Resolution::Ambiguous(n),
    }
}

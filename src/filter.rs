//! Tag and name narrowing for SQL query and dashboard listings.

use crate::model::{SqlDashboard, SqlQuery};
use crate::resolve::contains_ignore_case;

/// Entities that carry a name and an optional tag set.
pub trait Tagged {
    fn name(&self) -> &str;
    fn tags(&self) -> Option<&[String]>;
}

impl Tagged for SqlQuery {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

impl Tagged for SqlDashboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

/// Filter criteria parsed from `--tag` and `--name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    tags: Vec<String>,
    name: Option<String>,
}

impl ListFilter {
    /// Build from the raw flag values. `raw_tags` is comma separated; blank
    /// tokens are dropped and an empty name is treated as absent.
    pub fn new(raw_tags: Option<&str>, name: Option<&str>) -> Self {
        Self {
            tags: raw_tags.map(parse_tags).unwrap_or_default(),
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.name.is_none()
    }

    /// True when every filter tag is in the entity's tag set (ignoring case)
    /// and the name contains the name filter.
    pub fn accepts<T: Tagged>(&self, entity: &T) -> bool {
        self.accepts_tags(entity) && self.accepts_name(entity)
    }

    fn accepts_tags<T: Tagged>(&self, entity: &T) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let Some(own) = entity.tags() else {
            return false;
        };
        self.tags
            .iter()
            .all(|wanted| own.iter().any(|t| t.to_lowercase() == wanted.to_lowercase()))
    }

    fn accepts_name<T: Tagged>(&self, entity: &T) -> bool {
        match &self.name {
            Some(name) => contains_ignore_case(entity.name(), name),
            None => true,
        }
    }

    /// Filtered copy of `items`, preserving order. The input is untouched.
    pub fn apply<T: Tagged + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|e| self.accepts(*e)).cloned().collect()
    }
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

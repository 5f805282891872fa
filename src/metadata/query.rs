use log::debug;
use serde_json::Value;

use crate::models::package::By;

/// A search request against the locally cached package snapshot.
#[derive(Debug, Clone, Default)]
pub struct AurQuery {
    /// Search terms. An empty list yields an empty result set.
    pub needles: Vec<String>,
    pub by: By,
    /// Match needles as literal substrings instead of exact values.
    pub contains: bool,
}

impl AurQuery {
    pub(crate) fn matcher(&self) -> Matcher<'_> {
        let fields = search_fields(self.by);
        debug!(
            "package query: by={} needles={} contains={}",
            self.by,
            self.needles.len(),
            self.contains
        );

        Matcher {
            needles: &self.needles,
            fields,
            contains: self.contains,
        }
    }
}

/// A record field a selector matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchField {
    /// Field name inside the raw package object.
    pub(crate) path: &'static str,
    /// List-valued fields match if any element matches.
    pub(crate) array: bool,
}

/// Concrete record fields each selector matches against. Total over [`By`];
/// every selector resolves to at least one field.
pub(crate) fn search_fields(by: By) -> &'static [SearchField] {
    match by {
        By::Name => &[SearchField {
            path: "Name",
            array: false,
        }],
        By::NameDesc => &[
            SearchField {
                path: "Name",
                array: false,
            },
            SearchField {
                path: "Description",
                array: false,
            },
        ],
        By::None => &[
            SearchField {
                path: "Name",
                array: false,
            },
            SearchField {
                path: "Provides",
                array: true,
            },
        ],
        By::Provides => &[SearchField {
            path: "Provides",
            array: true,
        }],
        By::Maintainer => &[SearchField {
            path: "Maintainer",
            array: false,
        }],
        By::Depends => &[SearchField {
            path: "Depends",
            array: true,
        }],
        By::MakeDepends => &[SearchField {
            path: "MakeDepends",
            array: true,
        }],
        By::OptDepends => &[SearchField {
            path: "OptDepends",
            array: true,
        }],
        By::CheckDepends => &[SearchField {
            path: "CheckDepends",
            array: true,
        }],
    }
}

/// Compiled form of an [`AurQuery`]: a predicate evaluated directly against
/// each raw record, a disjunction over needles and their resolved fields.
/// Needles are always compared literally, so no quoting or escaping applies.
pub(crate) struct Matcher<'a> {
    needles: &'a [String],
    fields: &'static [SearchField],
    contains: bool,
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, record: &Value) -> bool {
        self.needles.iter().any(|needle| {
            self.fields
                .iter()
                .any(|field| self.field_matches(record, field, needle))
        })
    }

    fn field_matches(&self, record: &Value, field: &SearchField, needle: &str) -> bool {
        // Absent and null fields never match, and never error.
        match record.get(field.path) {
            None | Some(Value::Null) => false,
            Some(value) if field.array => value.as_array().is_some_and(|elements| {
                elements
                    .iter()
                    .any(|element| self.value_matches(element, needle))
            }),
            Some(value) => self.value_matches(value, needle),
        }
    }

    fn value_matches(&self, value: &Value, needle: &str) -> bool {
        match value.as_str() {
            Some(text) if self.contains => text.contains(needle),
            Some(text) => text == needle,
            None => false,
        }
    }
}

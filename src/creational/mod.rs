//! Creational patterns: simple factory, abstract factory, singleton, builder.

pub mod abstract_factory;
pub mod builder;
pub mod document;
pub mod simple_factory;
pub mod singleton;

use itertools::Itertools;

/// Selectors are matched after trimming and lowercasing.
pub(crate) fn normalize_selector(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Comma separated list used in "expected one of" messages.
pub(crate) fn expected_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().join(", ")
}

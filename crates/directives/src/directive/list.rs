//! List directives: ordered-for-output sets of string elements.
//!
//! Stored lists are deduplicated (first occurrence wins) and sorted by the
//! directive's ordering, so two headers built from the same elements in any
//! order compare and serialize identically. The optional collapse hook runs
//! at serialization time only and implements wildcard-style short-circuits
//! (`'none'` swallowing a CSP source list, `*` swallowing a CORS list)
//! without disturbing the stored elements.

use std::cmp::Ordering;

use crate::error::{BuildError, ParseError};
use crate::header::Header;
use crate::utils::strip_prefix_ignore_case;

use super::DirectiveValue;

/// Configuration for a list directive.
#[derive(Debug, Clone, Copy)]
pub struct ListSpec {
    pub(crate) separator: &'static str,
    pub(crate) literal: bool,
    pub(crate) accept: fn(&str) -> bool,
    pub(crate) order: Option<fn(&str, &str) -> Ordering>,
    pub(crate) collapse: Option<fn(&mut Vec<String>)>,
}

impl ListSpec {
    /// A comma-separated list whose elements satisfy `accept`.
    pub const fn new(accept: fn(&str) -> bool) -> Self {
        Self { separator: ",", literal: false, accept, order: None, collapse: None }
    }

    pub const fn separated_by(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Emits the joined elements with no name prefix.
    pub const fn literal(mut self) -> Self {
        self.literal = true;
        self
    }

    /// Overrides the default lexicographic element ordering.
    pub const fn ordered_by(mut self, order: fn(&str, &str) -> Ordering) -> Self {
        self.order = Some(order);
        self
    }

    /// Installs a serialization-time rewrite of the element list.
    pub const fn collapsed_with(mut self, collapse: fn(&mut Vec<String>)) -> Self {
        self.collapse = Some(collapse);
        self
    }

    fn sort(&self, values: &mut [String]) {
        match self.order {
            Some(order) => values.sort_by(|a, b| order(a, b)),
            None => values.sort(),
        }
    }
}

/// Canonical stored form: stable dedup, then sort.
pub(super) fn canonicalize(spec: &ListSpec, values: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    spec.sort(&mut seen);
    seen
}

pub(super) fn stringify(name: &str, spec: &ListSpec, values: &[String]) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    let mut values = values.to_vec();
    if let Some(collapse) = spec.collapse {
        collapse(&mut values);
    }
    spec.sort(&mut values);

    let joined = values.join(spec.separator);
    if spec.literal {
        return Some(joined);
    }
    Some(format!("{name}{}{joined}", spec.separator))
}

pub(super) fn parse(name: &str, spec: &ListSpec, segment: &str) -> Result<DirectiveValue, ParseError> {
    let raw = if spec.literal {
        segment
    } else {
        match strip_prefix_ignore_case(segment, name) {
            Some(rest) => rest.strip_prefix(spec.separator).unwrap_or(rest),
            None => segment,
        }
    };

    let split_on = spec.separator.trim();
    let mut elements = Vec::new();
    let parts: Vec<&str> = if split_on.is_empty() {
        raw.split_whitespace().collect()
    } else {
        raw.split(split_on).collect()
    };
    for part in parts {
        let element = part.trim();
        if element.is_empty() {
            continue;
        }
        if !(spec.accept)(element) {
            return Err(ParseError::invalid_keyword(segment));
        }
        elements.push(element.to_owned());
    }

    Ok(DirectiveValue::List(elements))
}

/// Typed operation carrier for a list directive key.
#[derive(Debug, Clone, Copy)]
pub struct ListKey {
    key: &'static str,
}

impl ListKey {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(self) -> &'static str {
        self.key
    }

    pub fn get(self, header: &Header) -> Option<&[String]> {
        match header.get(self.key) {
            Some(DirectiveValue::List(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn contains(self, header: &Header, value: &str) -> bool {
        self.get(header).is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Replaces the list; an empty iterator unsets instead. Elements are
    /// validated, deduplicated and sorted.
    pub fn set<I, S>(self, header: &Header, values: I) -> Result<Header, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return self.unset(header);
        }
        header.with(self.key, DirectiveValue::List(values))
    }

    pub fn unset(self, header: &Header) -> Result<Header, BuildError> {
        header.without(self.key)
    }

    /// Adds one element; a no-op if it is already present.
    pub fn include(self, header: &Header, value: &str) -> Result<Header, BuildError> {
        match self.get(header) {
            None => self.set(header, [value]),
            Some(_) if self.contains(header, value) => Ok(header.clone()),
            Some(current) => {
                let mut next = current.to_vec();
                next.push(value.to_owned());
                header.with(self.key, DirectiveValue::List(next))
            }
        }
    }

    /// Removes one element; a no-op if it is absent. Removing the last
    /// element unsets the directive.
    pub fn exclude(self, header: &Header, value: &str) -> Result<Header, BuildError> {
        let Some(current) = self.get(header) else {
            return Ok(header.clone());
        };
        if !current.iter().any(|v| v == value) {
            return Ok(header.clone());
        }

        let next: Vec<String> = current.iter().filter(|v| *v != value).cloned().collect();
        if next.is_empty() {
            return self.unset(header);
        }
        header.with(self.key, DirectiveValue::List(next))
    }

    pub fn set_fn<I, S>(self, values: I) -> impl Fn(Header) -> Result<Header, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        move |header| self.set(&header, values.clone())
    }

    pub fn unset_fn(self) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.unset(&header)
    }

    pub fn include_fn(self, value: impl Into<String>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let value = value.into();
        move |header| self.include(&header, &value)
    }

    pub fn exclude_fn(self, value: impl Into<String>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let value = value.into();
        move |header| self.exclude(&header, &value)
    }
}

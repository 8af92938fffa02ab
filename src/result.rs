//! The validation result algebra
//!
//! A `Validation` is the outcome of running a validator against a value.
//! Failures carry an ordered list of error messages, an optional tag
//! naming the failing construct, and an optional map of nested results
//! that localizes failures inside composite values.
//!
//! # Design Principles
//!
//! - Validity is exhaustive: a `Validation` is `Valid` or `Invalid`, nothing else
//! - Failures are data, never panics
//! - Merging preserves error insertion order
//! - Absent tag/items are distinguishable from empty ones

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::ValidationError;
use crate::printer::get_errors;

/// Nested results keyed by field name (objects) or index string (arrays).
pub type Items = BTreeMap<String, Validation>;

/// The outcome of a validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// The value passed every check.
    Valid,
    /// The value failed one or more checks.
    Invalid {
        /// Error messages, in the order the failing checks ran.
        errors: Vec<String>,
        /// Tag naming the failing construct (e.g. "object", "array").
        kind: Option<String>,
        /// Nested results localizing failures within a composite value.
        items: Option<Items>,
    },
}

impl Validation {
    /// Create a passing result.
    pub fn ok() -> Self {
        Validation::Valid
    }

    /// Create a failing result carrying only error messages.
    pub fn err(errors: Vec<String>) -> Self {
        Validation::Invalid {
            errors,
            kind: None,
            items: None,
        }
    }

    /// Create a failing result with a construct tag and nested results.
    ///
    /// The tag and items always travel together: a nested failure is
    /// meaningless without naming the construct it occurred inside.
    pub fn err_with(errors: Vec<String>, kind: impl Into<String>, items: Items) -> Self {
        Validation::Invalid {
            errors,
            kind: Some(kind.into()),
            items: Some(items),
        }
    }

    /// Returns true if the value passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Returns true if the value failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Validation::Invalid { .. })
    }

    /// Apply a function to every error message in this result.
    ///
    /// The function receives each top-level message together with its
    /// position in the error list, and is applied recursively to every
    /// nested result. The construct tag passes through unchanged. A
    /// `Valid` result is returned as-is.
    pub fn map_errors<F>(&self, f: &F) -> Validation
    where
        F: Fn(&str, usize) -> String,
    {
        match self {
            Validation::Valid => Validation::Valid,
            Validation::Invalid {
                errors,
                kind,
                items,
            } => Validation::Invalid {
                errors: errors
                    .iter()
                    .enumerate()
                    .map(|(i, e)| f(e, i))
                    .collect(),
                kind: kind.clone(),
                items: items.as_ref().map(|items| {
                    items
                        .iter()
                        .map(|(k, v)| (k.clone(), v.map_errors(f)))
                        .collect()
                }),
            },
        }
    }

    /// Combine two results.
    ///
    /// If either side is `Valid` the other side is returned (so when both
    /// are `Valid`, the second argument is returned). When both fail, the
    /// error lists are concatenated in argument order, the first operand's
    /// tag wins (even when absent), and nested results are merged key-wise,
    /// recursing for keys present on both sides. The merged result carries
    /// items only if at least one operand did.
    pub fn merge(self, other: Validation) -> Validation {
        let (e1, k1, i1) = match self {
            Validation::Valid => return other,
            Validation::Invalid {
                errors,
                kind,
                items,
            } => (errors, kind, items),
        };
        let (e2, i2) = match other {
            Validation::Valid => {
                return Validation::Invalid {
                    errors: e1,
                    kind: k1,
                    items: i1,
                }
            }
            Validation::Invalid { errors, items, .. } => (errors, items),
        };

        let items = if i1.is_none() && i2.is_none() {
            None
        } else {
            let mut merged = i1.unwrap_or_default();
            for (key, right) in i2.unwrap_or_default() {
                let entry = match merged.remove(&key) {
                    Some(left) => left.merge(right),
                    None => right,
                };
                merged.insert(key, entry);
            }
            Some(merged)
        };

        let mut errors = e1;
        errors.extend(e2);

        Validation::Invalid {
            errors,
            kind: k1,
            items,
        }
    }

    /// Fold a sequence of results into one, seeded with `ok()`.
    ///
    /// An empty sequence yields `Valid`.
    pub fn concat(results: impl IntoIterator<Item = Validation>) -> Validation {
        results
            .into_iter()
            .fold(Validation::ok(), Validation::merge)
    }

    /// Bridge a validation outcome into the standard `Result` ecosystem.
    ///
    /// `Valid` becomes `Ok(())`; `Invalid` becomes a [`ValidationError`]
    /// carrying the flattened error messages.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ValidationError::new(get_errors(&self)))
        }
    }
}

impl Serialize for Validation {
    /// Serializes to the canonical wire shape: `{"valid":true}` for a pass,
    /// `{"valid":false,"errors":[..],"type":..,"items":{..}}` for a failure,
    /// with absent tag/items omitted entirely rather than set to null.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Validation::Valid => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("valid", &true)?;
                map.end()
            }
            Validation::Invalid {
                errors,
                kind,
                items,
            } => {
                let len = 2 + kind.is_some() as usize + items.is_some() as usize;
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("valid", &false)?;
                map.serialize_entry("errors", errors)?;
                if let Some(kind) = kind {
                    map.serialize_entry("type", kind)?;
                }
                if let Some(items) = items {
                    map.serialize_entry("items", items)?;
                }
                map.end()
            }
        }
    }
}

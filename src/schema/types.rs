//! Schema type definitions
//!
//! Schemas are deliberately dynamic: a rule value can hold anything,
//! including the wrong kind of thing. The compiler validates every schema
//! against the rule meta-schema before use, and a malformed schema turns
//! into a deterministic always-failing pipeline instead of a compile-time
//! panic. The typed builder methods cover the well-formed path; [`rule`]
//! admits arbitrary entries.
//!
//! [`rule`]: SchemaRules::rule

use std::collections::BTreeMap;

use serde_json::Value;

use crate::validators::Validator;

/// The value bound to a rule key.
#[derive(Debug, Clone)]
pub enum RuleValue {
    /// A boolean, the expected shape for `required`.
    Bool(bool),
    /// A string, the expected shape for `type`.
    Str(String),
    /// A custom validator, the expected shape for `validator`.
    Validator(Validator),
    /// Anything else; always a type mismatch on a recognized rule key.
    Other(Value),
}

impl RuleValue {
    /// Returns the shape name for error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            RuleValue::Bool(_) => "bool",
            RuleValue::Str(_) => "string",
            RuleValue::Validator(_) => "validator",
            RuleValue::Other(value) => crate::helpers::json_type_name(value),
        }
    }
}

/// The rules for a single field (or, as [`ArraySchema`], for the items of
/// an array).
///
/// Recognized keys: `required` (bool), `type` (string), `validator`
/// (validator). Unrecognized keys are permitted and ignored. Iteration is
/// in lexicographic key order, which fixes the canonical check order.
#[derive(Debug, Clone, Default)]
pub struct SchemaRules {
    entries: BTreeMap<String, RuleValue>,
}

/// An array schema is a single rules record applied to every item.
pub type ArraySchema = SchemaRules;

impl SchemaRules {
    /// An empty rules record: no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the field as required (or explicitly optional).
    pub fn required(self, required: bool) -> Self {
        self.rule("required", RuleValue::Bool(required))
    }

    /// Constrain the field to the named type (see
    /// [`typechecks`](crate::helpers::typechecks) for the tag set).
    pub fn of_type(self, type_name: impl Into<String>) -> Self {
        self.rule("type", RuleValue::Str(type_name.into()))
    }

    /// Attach a custom validator to the field.
    pub fn validator(self, validator: Validator) -> Self {
        self.rule("validator", RuleValue::Validator(validator))
    }

    /// Bind an arbitrary rule key to an arbitrary value.
    ///
    /// This is the untyped escape hatch: it accepts unrecognized keys
    /// (which the compiler ignores) and wrong-shaped values for recognized
    /// keys (which the compiler reports as schema errors).
    pub fn rule(mut self, key: impl Into<String>, value: RuleValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Iterate rule entries in lexicographic key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Is the field marked `required: true`?
    ///
    /// Only consulted after the rules record passed meta-validation, so a
    /// wrong-shaped `required` never reaches this.
    pub(crate) fn is_required(&self) -> bool {
        matches!(self.entries.get("required"), Some(RuleValue::Bool(true)))
    }

    /// The declared type name, if any.
    pub(crate) fn type_name(&self) -> Option<&str> {
        match self.entries.get("type") {
            Some(RuleValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// The custom validator, if any.
    pub(crate) fn custom_validator(&self) -> Option<&Validator> {
        match self.entries.get("validator") {
            Some(RuleValue::Validator(v)) => Some(v),
            _ => None,
        }
    }
}

/// A schema for an object: rules per field name.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: BTreeMap<String, SchemaRules>,
}

impl ObjectSchema {
    /// An empty schema: accepts any object (and, in strict mode, rejects
    /// every key).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its rules.
    pub fn field(mut self, name: impl Into<String>, rules: SchemaRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// The declared field names, in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate fields and their rules in lexicographic order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SchemaRules)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

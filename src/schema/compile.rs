//! Schema compiler
//!
//! Converts a declarative schema into an ordered pipeline of atomic
//! validators. The schema is validated against the rule meta-schema
//! first; a malformed schema compiles to a single validator that fails
//! every input with `"Schema error: "` diagnostics, so schema mistakes
//! surface deterministically at validation time instead of panicking at
//! compile time.
//!
//! Pipeline order for objects: is-object, then (accumulating within each
//! category) required keys, declared types, custom validators; strict
//! compilation appends the undeclared-key check after the base four, so
//! under short-circuit composition a missing required field is reported
//! before an extra one.

use crate::compose::{all, all_while_ok};
use crate::printer::get_errors;
use crate::result::{Items, Validation};
use crate::validators::{
    always_err, validate_array_items_have_type, validate_array_items_pass, validate_is_array,
    validate_is_object, validate_obj_has_key, validate_obj_only_has_keys,
    validate_obj_prop_has_type, validate_obj_prop_passes, Validator,
};

use super::types::{ArraySchema, ObjectSchema, RuleValue, SchemaRules};

/// Wrap a nested result under a single key, tagged as an object failure.
fn nest_under(key: &str, result: Validation) -> Validation {
    if result.is_ok() {
        return Validation::ok();
    }
    let mut items = Items::new();
    items.insert(key.to_string(), result);
    Validation::err_with(vec![], "object", items)
}

/// The expected shape for a recognized rule key, if any.
fn expected_rule_shape(key: &str) -> Option<&'static str> {
    match key {
        "required" => Some("bool"),
        "type" => Some("string"),
        "validator" => Some("validator"),
        _ => None,
    }
}

/// Does the rule value have the expected shape for its key?
fn rule_shape_matches(key: &str, value: &RuleValue) -> bool {
    match key {
        "required" => matches!(value, RuleValue::Bool(_)),
        "type" => matches!(value, RuleValue::Str(_)),
        "validator" => matches!(value, RuleValue::Validator(_)),
        _ => true,
    }
}

/// Validate a rules record against the rule meta-schema.
///
/// Checks stop at the first wrong-shaped recognized key, in lexicographic
/// key order. Unrecognized keys pass.
fn validate_as_schema_rules(rules: &SchemaRules) -> Validation {
    for (key, value) in rules.entries() {
        if !rule_shape_matches(key, value) {
            // Unwrap is fine: a shape mismatch implies a recognized key.
            let expected = expected_rule_shape(key).unwrap_or("value");
            return nest_under(
                key,
                Validation::err(vec![format!(
                    "rule must be of type \"{}\", got {}",
                    expected,
                    value.shape_name()
                )]),
            );
        }
    }
    Validation::ok()
}

/// Validate an object schema against the meta-schema, nesting each
/// field's rule failures under the field name.
pub fn validate_as_object_schema(schema: &ObjectSchema) -> Validation {
    Validation::concat(
        schema
            .fields()
            .map(|(name, rules)| nest_under(name, validate_as_schema_rules(rules))),
    )
}

/// Validate an array schema (a single rules record) against the
/// meta-schema.
pub fn validate_as_array_schema(schema: &ArraySchema) -> Validation {
    validate_as_schema_rules(schema)
}

/// Compile a failed meta-validation into the always-failing pipeline.
fn process_schema_error(result: &Validation) -> Vec<Validator> {
    let errors = get_errors(result)
        .into_iter()
        .map(|e| format!("Schema error: {}", e))
        .collect();
    vec![always_err(errors)]
}

/// Convert an object schema into its validator pipeline.
///
/// Emits exactly four validators: is-object, then one accumulating check
/// per category (required keys, declared types, custom validators). The
/// categories are meant to be run under [`all_while_ok`] so that
/// non-object input never reaches the field-level checks.
pub fn from_object_schema(schema: &ObjectSchema) -> Vec<Validator> {
    let schema_result = validate_as_object_schema(schema);
    if schema_result.is_err() {
        return process_schema_error(&schema_result);
    }

    let required_checks = schema
        .fields()
        .filter(|(_, rules)| rules.is_required())
        .map(|(name, _)| validate_obj_has_key(name))
        .collect();

    let type_checks = schema
        .fields()
        .filter_map(|(name, rules)| {
            rules
                .type_name()
                .map(|ty| validate_obj_prop_has_type(ty, name))
        })
        .collect();

    let validator_checks = schema
        .fields()
        .filter_map(|(name, rules)| {
            rules
                .custom_validator()
                .map(|v| validate_obj_prop_passes(v.clone(), name))
        })
        .collect();

    vec![
        validate_is_object(),
        all(required_checks),
        all(type_checks),
        all(validator_checks),
    ]
}

/// Like [`from_object_schema`], plus a final validator forbidding any key
/// not declared in the schema.
pub fn from_object_schema_strict(schema: &ObjectSchema) -> Vec<Validator> {
    let schema_result = validate_as_object_schema(schema);
    if schema_result.is_err() {
        return process_schema_error(&schema_result);
    }

    let mut validators = from_object_schema(schema);
    validators.push(validate_obj_only_has_keys(
        schema.keys().map(String::from).collect(),
    ));
    validators
}

/// Convert an array schema into its validator pipeline: is-array first,
/// then the item type check, then the item custom check.
pub fn from_array_schema(schema: &ArraySchema) -> Vec<Validator> {
    let schema_result = validate_as_array_schema(schema);
    if schema_result.is_err() {
        return process_schema_error(&schema_result);
    }

    let mut validators = vec![validate_is_array()];
    for (key, value) in schema.entries() {
        match (key, value) {
            ("type", RuleValue::Str(ty)) => {
                validators.push(validate_array_items_have_type(ty.clone()));
            }
            ("validator", RuleValue::Validator(v)) => {
                validators.push(validate_array_items_pass(v.clone()));
            }
            _ => {}
        }
    }
    validators
}

/// A ready-to-call strict object validator with short-circuit semantics.
pub fn object_validator(schema: &ObjectSchema) -> Validator {
    all_while_ok(from_object_schema_strict(schema))
}

/// A ready-to-call array validator with short-circuit semantics.
pub fn array_validator(schema: &ArraySchema) -> Validator {
    all_while_ok(from_array_schema(schema))
}

//! Atomic validators
//!
//! The building blocks every pipeline is composed from. Each validator is
//! a total, panic-free function from a candidate value to a [`Validation`].
//! Field-level failures are reported in the nested shape: an outer result
//! tagged `"object"` (or `"array"`) whose items map the offending field
//! name (or index) to its own result.
//!
//! Keyed validators pass on values of the wrong shape (a non-object has no
//! fields to check); establishing the shape is the job of the preceding
//! is-object/is-array check under short-circuit composition.

use std::sync::Arc;

use serde_json::Value;

use crate::helpers::{is_array, is_object, json_type_name, typechecks};
use crate::result::{Items, Validation};

/// A pure function from a candidate value to a validation result.
///
/// Cloning is cheap and composition never mutates its inputs, so
/// validators can be freely shared, including across threads.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&Value) -> Validation + Send + Sync>);

impl Validator {
    /// Wrap a function as a validator.
    pub fn new(f: impl Fn(&Value) -> Validation + Send + Sync + 'static) -> Self {
        Validator(Arc::new(f))
    }

    /// Run the validator against a candidate value.
    pub fn run(&self, value: &Value) -> Validation {
        (self.0)(value)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Wrap a failure for a single field of an object.
fn field_failure(field: &str, nested: Validation) -> Validation {
    let mut items = Items::new();
    items.insert(field.to_string(), nested);
    Validation::err_with(vec![], "object", items)
}

/// Wrap a failure for a single index of an array.
fn item_failure(index: usize, nested: Validation) -> Validation {
    let mut items = Items::new();
    items.insert(index.to_string(), nested);
    Validation::err_with(vec![], "array", items)
}

/// A validator that passes any value.
pub fn always_ok() -> Validator {
    Validator::new(|_| Validation::ok())
}

/// A validator that fails any value with the given messages.
pub fn always_err(errors: Vec<String>) -> Validator {
    Validator::new(move |_| Validation::err(errors.clone()))
}

/// Fails unless the value is an object.
pub fn validate_is_object() -> Validator {
    Validator::new(|value| {
        if is_object(value) {
            Validation::ok()
        } else {
            Validation::err(vec![format!(
                "expected an object, got {}",
                json_type_name(value)
            )])
        }
    })
}

/// Fails unless the value is an array.
pub fn validate_is_array() -> Validator {
    Validator::new(|value| {
        if is_array(value) {
            Validation::ok()
        } else {
            Validation::err(vec![format!(
                "expected an array, got {}",
                json_type_name(value)
            )])
        }
    })
}

/// Fails when an object lacks the given key.
pub fn validate_obj_has_key(key: impl Into<String>) -> Validator {
    let key = key.into();
    Validator::new(move |value| match value.as_object() {
        Some(obj) if !obj.contains_key(&key) => field_failure(
            &key,
            Validation::err(vec!["required field is missing".to_string()]),
        ),
        _ => Validation::ok(),
    })
}

/// Fails when an object has the given key bound to a value of the wrong
/// type. Absent keys pass; presence is [`validate_obj_has_key`]'s job.
pub fn validate_obj_prop_has_type(type_name: impl Into<String>, key: impl Into<String>) -> Validator {
    let type_name = type_name.into();
    let key = key.into();
    Validator::new(move |value| {
        let prop = value.as_object().and_then(|obj| obj.get(&key));
        match prop {
            Some(prop) if !typechecks(prop, &type_name) => field_failure(
                &key,
                Validation::err(vec![format!(
                    "expected type \"{}\", got {}",
                    type_name,
                    json_type_name(prop)
                )]),
            ),
            _ => Validation::ok(),
        }
    })
}

/// Fails when an object has the given key bound to a value the inner
/// validator rejects, nesting the inner result under the key.
pub fn validate_obj_prop_passes(inner: Validator, key: impl Into<String>) -> Validator {
    let key = key.into();
    Validator::new(move |value| {
        let prop = value.as_object().and_then(|obj| obj.get(&key));
        match prop {
            Some(prop) => {
                let result = inner.run(prop);
                if result.is_err() {
                    field_failure(&key, result)
                } else {
                    Validation::ok()
                }
            }
            None => Validation::ok(),
        }
    })
}

/// Fails when an object carries any key outside the given set, with one
/// nested failure per undeclared key.
pub fn validate_obj_only_has_keys(keys: Vec<String>) -> Validator {
    Validator::new(move |value| match value.as_object() {
        Some(obj) => Validation::concat(
            obj.keys()
                .filter(|k| !keys.contains(k))
                .map(|k| {
                    field_failure(
                        k,
                        Validation::err(vec!["field is not declared in the schema".to_string()]),
                    )
                }),
        ),
        None => Validation::ok(),
    })
}

/// Fails when any array item has the wrong type, with one nested failure
/// per offending index.
pub fn validate_array_items_have_type(type_name: impl Into<String>) -> Validator {
    let type_name = type_name.into();
    Validator::new(move |value| match value.as_array() {
        Some(arr) => Validation::concat(arr.iter().enumerate().filter_map(|(i, item)| {
            if typechecks(item, &type_name) {
                None
            } else {
                Some(item_failure(
                    i,
                    Validation::err(vec![format!(
                        "expected type \"{}\", got {}",
                        type_name,
                        json_type_name(item)
                    )]),
                ))
            }
        })),
        None => Validation::ok(),
    })
}

/// Fails when any array item is rejected by the inner validator, nesting
/// each inner result under its index.
pub fn validate_array_items_pass(inner: Validator) -> Validator {
    Validator::new(move |value| match value.as_array() {
        Some(arr) => Validation::concat(arr.iter().enumerate().filter_map(|(i, item)| {
            let result = inner.run(item);
            if result.is_err() {
                Some(item_failure(i, result))
            } else {
                None
            }
        })),
        None => Validation::ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested_for<'a>(result: &'a Validation, key: &str) -> &'a Validation {
        match result {
            Validation::Invalid {
                items: Some(items), ..
            } => &items[key],
            other => panic!("expected Invalid with items, got {:?}", other),
        }
    }

    #[test]
    fn test_always_ok_and_always_err() {
        assert!(always_ok().run(&json!(null)).is_ok());
        let v = always_err(vec!["no".into()]);
        assert_eq!(v.run(&json!({})), Validation::err(vec!["no".into()]));
        assert_eq!(v.run(&json!(42)), Validation::err(vec!["no".into()]));
    }

    #[test]
    fn test_validate_is_object() {
        let v = validate_is_object();
        assert!(v.run(&json!({ "a": 1 })).is_ok());
        let failure = v.run(&json!([1, 2]));
        match failure {
            Validation::Invalid { errors, .. } => {
                assert_eq!(errors, vec!["expected an object, got array"]);
            }
            Validation::Valid => panic!("expected Invalid"),
        }
    }

    #[test]
    fn test_validate_is_array() {
        let v = validate_is_array();
        assert!(v.run(&json!([])).is_ok());
        assert!(v.run(&json!("nope")).is_err());
    }

    #[test]
    fn test_validate_obj_has_key() {
        let v = validate_obj_has_key("name");
        assert!(v.run(&json!({ "name": "x" })).is_ok());

        let failure = v.run(&json!({}));
        assert!(nested_for(&failure, "name").is_err());
    }

    #[test]
    fn test_validate_obj_has_key_passes_non_objects() {
        let v = validate_obj_has_key("name");
        assert!(v.run(&json!(42)).is_ok());
    }

    #[test]
    fn test_validate_obj_prop_has_type() {
        let v = validate_obj_prop_has_type("string", "name");
        assert!(v.run(&json!({ "name": "x" })).is_ok());
        assert!(v.run(&json!({})).is_ok());

        let failure = v.run(&json!({ "name": 42 }));
        match nested_for(&failure, "name") {
            Validation::Invalid { errors, .. } => {
                assert_eq!(errors, &["expected type \"string\", got int"]);
            }
            Validation::Valid => panic!("expected Invalid"),
        }
    }

    #[test]
    fn test_validate_obj_prop_passes() {
        let positive = Validator::new(|v: &Value| {
            if v.as_i64().map(|n| n > 0).unwrap_or(false) {
                Validation::ok()
            } else {
                Validation::err(vec!["must be positive".into()])
            }
        });
        let v = validate_obj_prop_passes(positive, "age");

        assert!(v.run(&json!({ "age": 30 })).is_ok());
        assert!(v.run(&json!({})).is_ok());

        let failure = v.run(&json!({ "age": -1 }));
        assert_eq!(
            nested_for(&failure, "age"),
            &Validation::err(vec!["must be positive".into()])
        );
    }

    #[test]
    fn test_validate_obj_only_has_keys() {
        let v = validate_obj_only_has_keys(vec!["a".into()]);
        assert!(v.run(&json!({ "a": 1 })).is_ok());
        assert!(v.run(&json!({})).is_ok());

        let failure = v.run(&json!({ "a": 1, "b": 2, "c": 3 }));
        assert!(nested_for(&failure, "b").is_err());
        assert!(nested_for(&failure, "c").is_err());
    }

    #[test]
    fn test_validate_array_items_have_type() {
        let v = validate_array_items_have_type("number");
        assert!(v.run(&json!([1, 2, 3])).is_ok());
        assert!(v.run(&json!([])).is_ok());

        let failure = v.run(&json!([1, 2, "x"]));
        match nested_for(&failure, "2") {
            Validation::Invalid { errors, .. } => {
                assert_eq!(errors, &["expected type \"number\", got string"]);
            }
            Validation::Valid => panic!("expected Invalid"),
        }
    }

    #[test]
    fn test_validate_array_items_pass() {
        let nonempty = Validator::new(|v: &Value| {
            if v.as_str().map(|s| !s.is_empty()).unwrap_or(false) {
                Validation::ok()
            } else {
                Validation::err(vec!["must be a non-empty string".into()])
            }
        });
        let v = validate_array_items_pass(nonempty);

        assert!(v.run(&json!(["a", "b"])).is_ok());

        let failure = v.run(&json!(["a", ""]));
        assert_eq!(
            nested_for(&failure, "1"),
            &Validation::err(vec!["must be a non-empty string".into()])
        );
    }
}

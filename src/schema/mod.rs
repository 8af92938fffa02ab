//! Declarative schemas and the schema-to-validator compiler
//!
//! # Design Principles
//!
//! - Schemas are validated against the rule meta-schema before use
//! - A malformed schema fails every validation attempt, it never panics
//! - Compilation is deterministic: fixed pipeline order, lexicographic
//!   field order
//! - Field-level failures nest under the field name, item-level failures
//!   under the index

mod compile;
mod types;

pub use compile::{
    array_validator, from_array_schema, from_object_schema, from_object_schema_strict,
    object_validator, validate_as_array_schema, validate_as_object_schema,
};
pub use types::{ArraySchema, ObjectSchema, RuleValue, SchemaRules};

//! shapecheck - A strict, composable schema validation library for JSON values
//!
//! Given a declarative schema describing required fields, expected types,
//! and custom checks, shapecheck validates `serde_json::Value` objects and
//! arrays and reports structured, nested error information. Validation
//! failures are data, never panics: every check returns a [`Validation`]
//! that can be merged, mapped, and nested to mirror the shape of the value
//! under test.
//!
//! ```
//! use serde_json::json;
//! use shapecheck::{object_validator, ObjectSchema, SchemaRules};
//!
//! let schema = ObjectSchema::new()
//!     .field("name", SchemaRules::new().required(true).of_type("string"));
//! let validate = object_validator(&schema);
//!
//! assert!(validate.run(&json!({ "name": "Alice" })).is_ok());
//! assert!(validate.run(&json!({ "name": 42 })).is_err());
//! ```

pub mod compose;
pub mod errors;
pub mod helpers;
pub mod printer;
pub mod result;
pub mod schema;
pub mod validators;

pub use compose::{all, all_while_ok};
pub use errors::ValidationError;
pub use printer::get_errors;
pub use result::{Items, Validation};
pub use schema::{
    array_validator, from_array_schema, from_object_schema, from_object_schema_strict,
    object_validator, validate_as_array_schema, validate_as_object_schema, ArraySchema,
    ObjectSchema, RuleValue, SchemaRules,
};
pub use validators::Validator;

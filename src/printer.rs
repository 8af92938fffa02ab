//! Flattening of validation results into human-readable strings
//!
//! Nested failures are prefixed with a dotted path (array indices appear
//! as bare numbers), so a failure two levels deep prints as
//! `address.zip: <message>`.

use crate::result::Validation;

/// Flatten a result into its error messages.
///
/// A `Valid` result yields no messages. Nested results are flattened
/// recursively, each message prefixed with the dotted path of the item
/// keys leading to it. Top-level messages carry no prefix.
pub fn get_errors(validation: &Validation) -> Vec<String> {
    let mut out = Vec::new();
    collect(validation, "", &mut out);
    out
}

fn collect(validation: &Validation, path: &str, out: &mut Vec<String>) {
    let Validation::Invalid { errors, items, .. } = validation else {
        return;
    };

    for error in errors {
        if path.is_empty() {
            out.push(error.clone());
        } else {
            out.push(format!("{}: {}", path, error));
        }
    }

    if let Some(items) = items {
        for (key, nested) in items {
            let nested_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", path, key)
            };
            collect(nested, &nested_path, out);
        }
    }
}

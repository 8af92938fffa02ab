//! Composition combinators
//!
//! Two policies for running a list of validators against one value:
//! accumulate every failure, or stop at the first. Both are built on the
//! same merge primitive from the result algebra, so only this layer
//! decides which policy applies.

use crate::result::Validation;
use crate::validators::Validator;

/// Run every validator against the value and accumulate all failures.
///
/// Later validators run even after earlier ones fail; errors appear in
/// validator order. An empty list passes everything.
pub fn all(validators: Vec<Validator>) -> Validator {
    Validator::new(move |value| Validation::concat(validators.iter().map(|v| v.run(value))))
}

/// Run validators in order, stopping at the first failure.
///
/// The first failing result is returned as-is and later validators are
/// never invoked, so a validator may assume the value already passed
/// every check before it (e.g. a field check may assume the value is an
/// object). If all pass, the result is `Valid`.
pub fn all_while_ok(validators: Vec<Validator>) -> Validator {
    Validator::new(move |value| {
        for v in &validators {
            let result = v.run(value);
            if result.is_err() {
                return result;
            }
        }
        Validation::ok()
    })
}

//! The single-valued "no meaningful data" type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A zero-size value standing in for "no meaningful response".
///
/// Exactly one logical value exists: every instance compares equal and hashes
/// identically. It is a concrete inhabitant of a one-element set — returning
/// it says "the operation completed with nothing to report", which is not the
/// same as the operation never having run.
///
/// Void requests (`Request<Response = Unit>`) resolve to this value so they
/// can reuse the typed-response dispatch path unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

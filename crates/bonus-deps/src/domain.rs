//! Domain types for problem files and their bonus links.

use serde_json::{Number, Value};
use std::fmt;

/// File extension that marks a problem description file.
pub const PROBLEM_EXTENSION: &str = "problem";

/// Identifier of a problem, as it appears on a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemId(pub String);

impl ProblemId {
    /// Create a new problem ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the identifier from a problem file name.
    ///
    /// Takes the text before the first `.`, so `3.problem` yields `3` and
    /// `1.5.problem` yields `1`.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        let stem = file_name.split('.').next().unwrap_or_default();
        Self::new(stem)
    }

    /// Convert a bonus entry's `problem` value to an identifier.
    ///
    /// Strings are taken verbatim. Integers keep every digit as written, of
    /// any size. Floats use their shortest round-trip text (`1.50` -> `1.5`).
    /// Any other JSON value uses its compact JSON text.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::new(s.as_str()),
            Value::Number(n) => Self::new(number_text(n)),
            other => Self::new(other.to_string()),
        }
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Text of a JSON number. Relies on serde_json's `arbitrary_precision`, which
/// keeps the literal as written.
fn number_text(n: &Number) -> String {
    let literal = n.to_string();
    if !literal.contains(['.', 'e', 'E']) {
        return literal;
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map_or(literal, |normalized| normalized.to_string())
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProblemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single bonus that unlocks another problem.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusEntry {
    /// Category of the bonus. Carried along but never affects output.
    pub bonus: Value,

    /// The problem this bonus unlocks.
    pub problem: ProblemId,
}

/// A parsed problem file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemRecord {
    /// Identifier derived from the file name.
    pub id: ProblemId,

    /// Bonus entries in file order.
    pub bonuses: Vec<BonusEntry>,
}

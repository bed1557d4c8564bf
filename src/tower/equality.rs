use anyhow::Result;

use crate::values::Value;

/// Numeric equivalence across categories.
///
/// Resolves each operand's strategy, combines them, and compares under
/// the winning strategy's semantics. `equiv(3, 3.0)` holds because the
/// float tower governs the pair.
pub fn equiv(x: &Value, y: &Value) -> Result<bool> {
    x.ops().combine(y.ops()).equiv(x, y)
}

/// Strict numeric equality: the operands must share a category *and*
/// be equivalent under its semantics. Stricter than [`equiv`] — an
/// integer `3` never `equal`s a float `3.0`.
pub fn equal(x: &Value, y: &Value) -> Result<bool> {
    if x.category() != y.category() {
        return Ok(false);
    }

    equiv(x, y)
}

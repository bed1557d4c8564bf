use super::Ops;
use crate::values::Value;

/// The seven numeric representation classes the tower recognizes.
///
/// A value's category is purely derived from its runtime representation;
/// two values of the same category always share arithmetic semantics.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Category {
    Int64Like,
    UInt64Like,
    Float64Like,
    Rational,
    NativeDecimal,
    BigInt,
    BigDecimal,
}

impl Category {
    /// The strategy singleton governing this category's semantics.
    pub fn ops(self) -> Ops {
        match self {
            Category::Int64Like => Ops::Int64,
            Category::UInt64Like => Ops::UInt64,
            Category::Float64Like => Ops::Float64,
            Category::Rational => Ops::Ratio,
            Category::NativeDecimal => Ops::Decimal,
            Category::BigInt => Ops::BigInt,
            Category::BigDecimal => Ops::BigDec,
        }
    }
}

impl Value {
    /// Classify this value into one of the seven categories.
    ///
    /// Total: a value with no numeric representation (`Bool`, `Str`)
    /// deliberately falls back to [`Category::Int64Like`] instead of
    /// failing. Conversions under integer semantics get their own chance
    /// to reject it later.
    pub fn category(&self) -> Category {
        match self {
            Value::Int(_) => Category::Int64Like,
            Value::Byte(_) | Value::Uint(_) => Category::UInt64Like,
            Value::Float(_) => Category::Float64Like,
            Value::Ratio(_) => Category::Rational,
            Value::Decimal(_) => Category::NativeDecimal,
            Value::BigInt(_) => Category::BigInt,
            Value::BigDec(_) => Category::BigDecimal,
            other => {
                log::trace!(
                    "{:?} has no numeric category, defaulting to integer semantics",
                    other.ty()
                );

                Category::Int64Like
            }
        }
    }

    pub fn ops(&self) -> Ops {
        self.category().ops()
    }
}

/// Classify an arbitrary boxed value.
pub fn category(x: &Value) -> Category {
    x.category()
}

/// Resolve the strategy singleton for an arbitrary boxed value.
pub fn ops(x: &Value) -> Ops {
    x.ops()
}

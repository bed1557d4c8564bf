use anyhow::Result;

use crate::values::Value;

/// How many strategies (and categories) the tower has.
///
/// Saving this as a constant makes it harder for the promotion table to
/// fall out of sync by requiring that every row take the same size.
pub const OPS_COUNT: usize = 7;

/// One strategy singleton per category.
///
/// These are the process-wide constants that govern mixed-type
/// operations: stateless, never mutated, safe to share across threads.
/// The discriminant doubles as the index into the `COMBINE` table.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Ops {
    Int64,
    UInt64,
    Float64,
    Ratio,
    Decimal,
    BigInt,
    BigDec,
}

use Ops::*;

/// The full promotion relation, `COMBINE[lhs][rhs]`.
///
/// Mixing the two fixed-width signednesses promotes to `BigInt`: neither
/// range safely contains the other. `Float64` absorbs everything, since
/// exactness is already lost. Ratio/decimal mixes need arbitrary
/// precision to reconcile, hence `BigDec`. The diagonal is idempotent.
///
/// Every entry must mirror its transpose; `symmetry` below checks all 49.
const COMBINE: [[Ops; OPS_COUNT]; OPS_COUNT] = [
    //             Int64    UInt64   Float64  Ratio    Decimal  BigInt   BigDec
    /* Int64   */ [Int64,   BigInt,  Float64, Ratio,   Decimal, BigInt,  BigDec],
    /* UInt64  */ [BigInt,  UInt64,  Float64, Ratio,   Decimal, BigInt,  BigDec],
    /* Float64 */ [Float64, Float64, Float64, Float64, Float64, Float64, Float64],
    /* Ratio   */ [Ratio,   Ratio,   Float64, Ratio,   BigDec,  Ratio,   BigDec],
    /* Decimal */ [Decimal, Decimal, Float64, BigDec,  Decimal, BigDec,  BigDec],
    /* BigInt  */ [BigInt,  BigInt,  Float64, Ratio,   BigDec,  BigInt,  BigDec],
    /* BigDec  */ [BigDec,  BigDec,  Float64, BigDec,  BigDec,  BigDec,  BigDec],
];

impl Ops {
    pub const ALL: [Ops; OPS_COUNT] = [Int64, UInt64, Float64, Ratio, Decimal, BigInt, BigDec];

    /// Resolve the single strategy that governs a mixed operation between
    /// this strategy's category and `other`'s. Total, and symmetric in
    /// its arguments.
    pub fn combine(self, other: Ops) -> Ops {
        COMBINE[self as usize][other as usize]
    }

    /// Decide numeric equivalence of `x` and `y` under this strategy's
    /// semantics, converting both operands into the representation this
    /// strategy understands.
    ///
    /// Only the integer and float towers compare by value today; the
    /// other five never had their cross-type comparison wired up and
    /// answer a flat `false`, even for a value against itself. Callers
    /// rely on that answer staying put until real semantics replace it.
    pub fn equiv(self, x: &Value, y: &Value) -> Result<bool> {
        match self {
            Int64 => Ok(x.to_i64()? == y.to_i64()?),
            // Native float equality. Not tolerance-based: 3.0 == 3.0
            // exactly, and NaN is equivalent to nothing.
            Float64 => Ok(x.to_f64()? == y.to_f64()?),
            UInt64 | Ratio | Decimal | BigInt | BigDec => Ok(false),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Ops::{self, *};
    use crate::*;

    #[test]
    fn symmetry() {
        for a in Ops::ALL {
            for b in Ops::ALL {
                assert_eq!(a.combine(b), b.combine(a), "{a:?} x {b:?}");
            }
        }
    }

    #[test]
    fn idempotent_diagonal() {
        for a in Ops::ALL {
            assert_eq!(a.combine(a), a);
        }
    }

    #[test]
    fn float_absorbs_everything() {
        for a in Ops::ALL {
            assert_eq!(Float64.combine(a), Float64);
            assert_eq!(a.combine(Float64), Float64);
        }
    }

    #[test]
    fn mixed_signedness_promotes_to_bigint() {
        assert_eq!(Int64.combine(UInt64), BigInt);
    }

    #[test]
    fn table_fidelity() {
        assert_eq!(Int64.combine(Ratio), Ratio);
        assert_eq!(Int64.combine(Decimal), Decimal);
        assert_eq!(Int64.combine(BigInt), BigInt);
        assert_eq!(Int64.combine(BigDec), BigDec);
        assert_eq!(UInt64.combine(Ratio), Ratio);
        assert_eq!(UInt64.combine(Decimal), Decimal);
        assert_eq!(UInt64.combine(BigInt), BigInt);
        assert_eq!(UInt64.combine(BigDec), BigDec);
        assert_eq!(Ratio.combine(Decimal), BigDec);
        assert_eq!(Ratio.combine(BigInt), Ratio);
        assert_eq!(Ratio.combine(BigDec), BigDec);
        assert_eq!(Decimal.combine(BigInt), BigDec);
        assert_eq!(Decimal.combine(BigDec), BigDec);
        assert_eq!(BigInt.combine(BigDec), BigDec);
    }

    #[test]
    fn integer_equivalence_is_exact() {
        assert!(Int64.equiv(&int!(3), &int!(3)).unwrap());
        assert!(!Int64.equiv(&int!(3), &int!(4)).unwrap());
    }

    #[test]
    fn float_equivalence_is_native() {
        assert!(Float64.equiv(&float!(3.0), &int!(3)).unwrap());
        assert!(!Float64.equiv(&float!(f64::NAN), &float!(f64::NAN)).unwrap());
    }

    #[test]
    fn unwired_towers_answer_false() {
        // Pins the current limitation: these strategies never compare by
        // value, not even a value against itself.
        assert!(!Ratio.equiv(&ratio!(1, 2), &ratio!(1, 2)).unwrap());
        assert!(!UInt64.equiv(&uint!(9), &uint!(9)).unwrap());
        assert!(!BigInt.equiv(&bigint!(9), &bigint!(9)).unwrap());
        assert!(!Decimal.equiv(&decimal!(9, 0), &decimal!(9, 0)).unwrap());
        assert!(!BigDec.equiv(&bigdec!(9), &bigdec!(9)).unwrap());
    }
}

//! The contagion core: which semantics govern a mixed-type operation.
//!
//! Combining two strategies always lands on exactly one of the seven,
//! regardless of argument order:
//!
//! | combine | Int64  | UInt64 | Float64 | Ratio   | Decimal | BigInt | BigDec |
//! | ------- | ------ | ------ | ------- | ------- | ------- | ------ | ------ |
//! | Int64   | Int64  | BigInt | Float64 | Ratio   | Decimal | BigInt | BigDec |
//! | UInt64  | BigInt | UInt64 | Float64 | Ratio   | Decimal | BigInt | BigDec |
//! | Float64 | Float64| Float64| Float64 | Float64 | Float64 | Float64| Float64|
//! | Ratio   | Ratio  | Ratio  | Float64 | Ratio   | BigDec  | Ratio  | BigDec |
//! | Decimal | Decimal| Decimal| Float64 | BigDec  | Decimal | BigDec | BigDec |
//! | BigInt  | BigInt | BigInt | Float64 | Ratio   | BigDec  | BigInt | BigDec |
//! | BigDec  | BigDec | BigDec | Float64 | BigDec  | BigDec  | BigDec | BigDec |

mod category;
mod equality;
mod ops;

pub use category::category;
pub use category::ops;
pub use category::Category;
pub use equality::equal;
pub use equality::equiv;
pub use ops::Ops;
pub use ops::OPS_COUNT;

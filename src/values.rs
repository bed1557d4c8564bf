mod convert;
mod value;
mod value_shorthands;

pub use value::BigDecimal;
pub use value::BigInteger;
pub use value::BigRational;
pub use value::Decimal;
pub use value::Type;
pub use value::Value;

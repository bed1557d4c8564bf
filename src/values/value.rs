pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt as BigInteger;
pub use num_rational::BigRational;
pub use rust_decimal::Decimal;

macro_rules! value {
    ($($variant:ident($type:ty)),+ $(,)?) => {
        #[derive(PartialEq, Debug, Clone)]
        pub enum Value {
            $(
                $variant($type),
            )*
        }

        #[derive(Debug, Eq, PartialEq, Clone)]
        pub enum Type {
            $(
                $variant,
            )*
        }

        impl Value {
            pub fn ty(&self) -> Type {
                match self {
                    $(
                        Value::$variant(_) => Type::$variant,
                    )*
                }
            }
        }
    };
}

value! {
    Bool(bool),
    Str(String),
    Byte(u8),
    Int(i64),
    Uint(u64),
    Float(f64),
    Ratio(BigRational),
    Decimal(Decimal),
    BigInt(BigInteger),
    BigDec(BigDecimal),
}

impl Value {
    pub fn is_numeric(&self) -> bool {
        use Type::*;

        matches!(
            self.ty(),
            Byte | Int | Uint | Float | Ratio | Decimal | BigInt | BigDec
        )
    }
}

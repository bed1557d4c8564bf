#[macro_export]
macro_rules! string {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::Str($data)
    }};
    (raw $data:expr) => {{
        use $crate::values::Value;

        Value::Str(Into::<String>::into($data))
    }};
}

#[macro_export]
macro_rules! bool {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::Bool($data)
    }};
}

#[macro_export]
macro_rules! byte {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::Byte($data)
    }};
}

#[macro_export]
macro_rules! int {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::Int($data)
    }};
}

#[macro_export]
macro_rules! uint {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::Uint($data)
    }};
}

#[macro_export]
macro_rules! float {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::Float($data)
    }};
}

#[macro_export]
macro_rules! ratio {
    ($numer:expr, $denom:expr) => {{
        use $crate::values::Value;

        Value::Ratio($crate::values::BigRational::new(
            $crate::values::BigInteger::from($numer),
            $crate::values::BigInteger::from($denom),
        ))
    }};
    (raw $data:expr) => {{
        use $crate::values::Value;

        Value::Ratio($data)
    }};
}

#[macro_export]
macro_rules! decimal {
    ($mantissa:expr, $scale:expr) => {{
        use $crate::values::Value;

        Value::Decimal($crate::values::Decimal::new($mantissa, $scale))
    }};
    (raw $data:expr) => {{
        use $crate::values::Value;

        Value::Decimal($data)
    }};
}

#[macro_export]
macro_rules! bigint {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::BigInt($crate::values::BigInteger::from($data))
    }};
    (raw $data:expr) => {{
        use $crate::values::Value;

        Value::BigInt($data)
    }};
}

#[macro_export]
macro_rules! bigdec {
    ($data:expr) => {{
        use $crate::values::Value;

        Value::BigDec($crate::values::BigDecimal::from($data))
    }};
    (raw $data:expr) => {{
        use $crate::values::Value;

        Value::BigDec($data)
    }};
}

#[cfg(test)]
mod test {
    use crate::values::{BigInteger, BigRational, Value};
    use crate::*;

    #[test]
    pub fn ints() {
        assert_eq!(int!(5), Value::Int(5))
    }

    #[test]
    pub fn ratios() {
        let half = Value::Ratio(BigRational::new(BigInteger::from(1), BigInteger::from(2)));

        assert_eq!(ratio!(1, 2), half);
        assert_eq!(ratio!(2, 4), half);
    }

    #[test]
    pub fn decimals() {
        assert_eq!(decimal!(35, 1), decimal!(350, 2));
    }

    #[test]
    pub fn bigints() {
        assert_eq!(bigint!(200), Value::BigInt(BigInteger::from(200)));
    }
}

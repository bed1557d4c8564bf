//! Total conversions from any boxed value to the primitive numeric types.
//!
//! Every numeric variant converts by plain cast; `Bool` coerces to 0/1 and
//! `Str` goes through a locale-invariant parse. Only a value that is not
//! numeric at all fails, and that error surfaces to the caller unchanged.

use anyhow::{bail, Result};
use num_traits::ToPrimitive;

use super::Value;

impl Value {
    pub fn to_f64(&self) -> Result<f64> {
        Ok(match self {
            Value::Bool(b) => *b as u8 as f64,
            Value::Str(s) => match s.parse::<f64>() {
                Ok(f) => f,
                Err(_) => bail!("cannot convert {s:?} to a float"),
            },
            Value::Byte(b) => *b as f64,
            Value::Int(n) => *n as f64,
            Value::Uint(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Ratio(r) => r.to_f64().unwrap_or(f64::INFINITY),
            Value::Decimal(d) => d.to_f64().unwrap_or(f64::INFINITY),
            Value::BigInt(n) => n.to_f64().unwrap_or(f64::INFINITY),
            Value::BigDec(d) => d.to_f64().unwrap_or(f64::INFINITY),
        })
    }

    pub fn to_i64(&self) -> Result<i64> {
        Ok(match self {
            Value::Bool(b) => *b as i64,
            Value::Str(s) => match s.parse::<i64>() {
                Ok(n) => n,
                Err(_) => bail!("cannot convert {s:?} to an integer"),
            },
            Value::Byte(b) => *b as i64,
            Value::Int(n) => *n,
            Value::Uint(n) => *n as i64,
            Value::Float(f) => *f as i64,
            Value::Ratio(r) if r.is_integer() => match r.to_integer().to_i64() {
                Some(n) => n,
                None => bail!("ratio does not fit in an integer"),
            },
            Value::Ratio(_) => bail!("cannot convert a non-integral ratio to an integer"),
            Value::Decimal(d) => match d.trunc().to_i64() {
                Some(n) => n,
                None => bail!("decimal does not fit in an integer"),
            },
            Value::BigInt(n) => match n.to_i64() {
                Some(n) => n,
                None => bail!("bigint does not fit in an integer"),
            },
            Value::BigDec(d) => match d.to_i64() {
                Some(n) => n,
                None => bail!("bigdec does not fit in an integer"),
            },
        })
    }

    pub fn to_u64(&self) -> Result<u64> {
        Ok(match self {
            Value::Bool(b) => *b as u64,
            Value::Str(s) => match s.parse::<u64>() {
                Ok(n) => n,
                Err(_) => bail!("cannot convert {s:?} to an unsigned integer"),
            },
            Value::Byte(b) => *b as u64,
            Value::Int(n) => *n as u64,
            Value::Uint(n) => *n,
            Value::Float(f) => *f as u64,
            Value::Ratio(r) if r.is_integer() => match r.to_integer().to_u64() {
                Some(n) => n,
                None => bail!("ratio does not fit in an unsigned integer"),
            },
            Value::Ratio(_) => bail!("cannot convert a non-integral ratio to an unsigned integer"),
            Value::Decimal(d) => match d.trunc().to_u64() {
                Some(n) => n,
                None => bail!("decimal does not fit in an unsigned integer"),
            },
            Value::BigInt(n) => match n.to_u64() {
                Some(n) => n,
                None => bail!("bigint does not fit in an unsigned integer"),
            },
            Value::BigDec(d) => match d.to_u64() {
                Some(n) => n,
                None => bail!("bigdec does not fit in an unsigned integer"),
            },
        })
    }
}

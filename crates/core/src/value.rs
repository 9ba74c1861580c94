//! Values carried by actions.
//!
//! A [`Value`] decides which kind of action `set_action` produces: booleans
//! become presence flags, lists become list or positional actions and every
//! other value becomes a flag followed by its text.

use std::fmt::{Display, Formatter};

/// A single item that can be written into a command line as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Display for Scalar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(text) => formatter.write_str(text),
            Scalar::Int(int) => write!(formatter, "{int}"),
            Scalar::Float(float) => formatter.write_str(&float_text(*float)),
            Scalar::Bool(flag) => write!(formatter, "{flag}"),
        }
    }
}

/// Shortest round-trip text of `float` that keeps a fractional part
/// (`5.0`) and writes exponents signed with at least two digits (`1e+16`).
fn float_text(float: f64) -> String {
    if float.is_nan() {
        return "nan".to_string();
    }

    let text = format!("{float:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

/// The payload given to `set_action`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Scalar>),
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => Value::Text(text),
            Scalar::Int(int) => Value::Int(int),
            Scalar::Float(float) => Value::Float(float),
            Scalar::Bool(flag) => Value::Bool(flag),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::Int(i64::from(value))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::List(value.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_text_forms() {
        assert_eq!(Scalar::from("abc").to_string(), "abc");
        assert_eq!(Scalar::from(10).to_string(), "10");
        assert_eq!(Scalar::from(-3_i64).to_string(), "-3");
        assert_eq!(Scalar::from(1.2).to_string(), "1.2");
        assert_eq!(Scalar::from(5.0).to_string(), "5.0");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }

    #[test]
    fn test_value_variant_follows_type() {
        assert_eq!(Value::from("x"), Value::Text("x".to_string()));
        assert_eq!(Value::from(7_u8), Value::Int(7));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Scalar::Int(1), Scalar::Int(2)])
        );
    }

    #[test]
    fn test_mixed_list_from_scalars() {
        let value = Value::from(vec![
            Scalar::from(1.2),
            Scalar::from(5),
            Scalar::from("abc"),
        ]);
        match value {
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                assert_eq!(rendered, vec!["1.2", "5", "abc"]);
            }
            _ => panic!("Expected a list value"),
        }
    }

    #[test]
    fn test_float_exponent_form() {
        assert_eq!(Scalar::from(1e16).to_string(), "1e+16");
        assert_eq!(Scalar::from(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Scalar::from(2.5e100).to_string(), "2.5e+100");
        assert_eq!(Scalar::from(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Scalar::from(0.0001).to_string(), "0.0001");
        assert_eq!(Scalar::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::from(f64::NAN).to_string(), "nan");
    }
}

//! Query target values and how they order against record text.
//!
//! Records hold text, but a query may target a number. When it does, the
//! record's text is parsed as a number before comparing; it is never compared
//! to the number's spelling. Text that does not parse, like an absent field,
//! has no ordering with the target at all.

use std::cmp::Ordering;
use std::fmt;

/// A target value on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Interpret untyped text: integer first, then finite float, else text.
    pub fn infer(s: &str) -> Self {
        if let Ok(n) = s.parse::<i64>() {
            return Value::Int(n);
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::Text(s.to_string()),
        }
    }

    /// Order a record value (left) against this target (right).
    ///
    /// Returns `None` when the two cannot be ordered: the field is absent, or
    /// the target is numeric and the field does not parse as a number.
    pub fn compare_field(&self, field: Option<&str>) -> Option<Ordering> {
        let field = field?;
        match self {
            Value::Text(target) => Some(field.cmp(target.as_str())),
            Value::Int(target) => {
                let field = field.trim();
                if let Ok(n) = field.parse::<i64>() {
                    Some(n.cmp(target))
                } else {
                    let f = field.parse::<f64>().ok()?;
                    f.partial_cmp(&(*target as f64))
                }
            }
            Value::Float(target) => field.trim().parse::<f64>().ok()?.partial_cmp(target),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer() {
        assert_eq!(Value::infer("3"), Value::Int(3));
        assert_eq!(Value::infer("-12"), Value::Int(-12));
        assert_eq!(Value::infer("1.5"), Value::Float(1.5));
        assert_eq!(Value::infer("Italy"), Value::Text("Italy".to_string()));
        assert_eq!(Value::infer("NaN"), Value::Text("NaN".to_string()));
        assert_eq!(Value::infer(""), Value::Text(String::new()));
    }

    #[test]
    fn test_text_ordering_is_lexicographic() {
        let target = Value::from("France");
        assert_eq!(target.compare_field(Some("France")), Some(Ordering::Equal));
        assert_eq!(target.compare_field(Some("Italy")), Some(Ordering::Greater));
        assert_eq!(target.compare_field(Some("Brazil")), Some(Ordering::Less));
    }

    #[test]
    fn test_int_target_parses_field() {
        let target = Value::from(10);
        // "9" > "10" as text, but 9 < 10 as a number
        assert_eq!(target.compare_field(Some("9")), Some(Ordering::Less));
        assert_eq!(target.compare_field(Some("10")), Some(Ordering::Equal));
        assert_eq!(target.compare_field(Some(" 11 ")), Some(Ordering::Greater));
    }

    #[test]
    fn test_int_target_against_float_field() {
        let target = Value::from(2);
        assert_eq!(target.compare_field(Some("2.5")), Some(Ordering::Greater));
        assert_eq!(target.compare_field(Some("2.0")), Some(Ordering::Equal));
    }

    #[test]
    fn test_float_target() {
        let target = Value::from(1.5);
        assert_eq!(target.compare_field(Some("1")), Some(Ordering::Less));
        assert_eq!(target.compare_field(Some("1.5")), Some(Ordering::Equal));
    }

    #[test]
    fn test_unorderable() {
        assert_eq!(Value::from(1).compare_field(Some("one")), None);
        assert_eq!(Value::from(1.0).compare_field(Some("")), None);
        assert_eq!(Value::from("x").compare_field(None), None);
        assert_eq!(Value::from(1).compare_field(None), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("Italy").to_string(), "\"Italy\"");
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
    }
}

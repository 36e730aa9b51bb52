//! Node values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use algoviz_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A finite number stored in a tree or graph node.
///
/// Non-finite input is rejected at construction, which makes the type
/// totally ordered. `-0.0` is stored as `0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct NodeValue(f64);

impl NodeValue {
    /// Create a value from a float.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `raw` is NaN or infinite.
    pub fn new(raw: f64) -> Result<Self> {
        if !raw.is_finite() {
            return Err(Error::validation(format!("{raw} is not a finite number")));
        }
        #[allow(clippy::float_cmp)]
        let normalized = if raw == 0.0 { 0.0 } else { raw };
        Ok(Self(normalized))
    }

    /// Parse a value from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the input is empty, not numeric, or not finite.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("value is empty"));
        }
        let raw = trimmed
            .parse::<f64>()
            .map_err(|_| Error::validation(format!("'{trimmed}' is not a number")))?;
        Self::new(raw)
    }

    /// Get the underlying float.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for NodeValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeValue {}

impl PartialOrd for NodeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for NodeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for NodeValue {
    type Error = Error;

    fn try_from(raw: f64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<NodeValue> for f64 {
    fn from(value: NodeValue) -> Self {
        value.0
    }
}

impl From<i32> for NodeValue {
    fn from(raw: i32) -> Self {
        Self(f64::from(raw))
    }
}

impl FromStr for NodeValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        assert!(NodeValue::new(f64::NAN).is_err());
        assert!(NodeValue::new(f64::INFINITY).is_err());
        assert!(NodeValue::new(f64::NEG_INFINITY).is_err());
        assert!(NodeValue::new(2.5).is_ok());
    }

    #[test]
    fn test_parse() {
        assert_eq!(NodeValue::parse(" 42 "), Ok(NodeValue::from(42)));
        assert_eq!("-3".parse::<NodeValue>(), Ok(NodeValue::from(-3)));
        assert!(matches!(NodeValue::parse(""), Err(Error::Validation { .. })));
        assert!(matches!(NodeValue::parse("abc"), Err(Error::Validation { .. })));
        assert!(matches!(NodeValue::parse("NaN"), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_negative_zero_normalized() {
        let neg = NodeValue::new(-0.0);
        assert_eq!(neg, Ok(NodeValue::from(0)));
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![NodeValue::from(3), NodeValue::from(-1), NodeValue::from(2)];
        values.sort();
        assert_eq!(
            values,
            vec![NodeValue::from(-1), NodeValue::from(2), NodeValue::from(3)]
        );
    }

    #[test]
    fn test_display_drops_integral_fraction() {
        assert_eq!(NodeValue::from(7).to_string(), "7");
        assert_eq!(NodeValue::parse("1.5").map(|v| v.to_string()), Ok("1.5".to_string()));
    }
}

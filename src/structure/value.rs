//! Element values shown in the visualizations
//!
//! Values are text as typed by the learner. Equality is textual;
//! ordering is numeric when both sides parse as numbers and
//! lexicographic otherwise.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Element stored in an array, matrix, list, stack or queue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Value(Arc<str>);

impl Value {
    /// Create value from text
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Value(text.into())
    }

    /// Blank cell
    pub fn blank() -> Self {
        Value(Arc::from(""))
    }

    /// Raw text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Numeric reading, if the text is a number
    pub fn as_number(&self) -> Option<f64> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
    }

    /// Numeric-aware ordering
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self.0.cmp(&other.0),
        }
    }

    /// Textual equality used by every search
    #[inline]
    pub fn matches(&self, target: &Value) -> bool {
        self.0 == target.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::new(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::new(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::new(n.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::new(n.to_string())
    }
}

/// Whether a slice is in non-decreasing numeric-aware order
pub fn is_sorted(values: &[Value]) -> bool {
    values
        .windows(2)
        .all(|w| w[0].compare(&w[1]) != Ordering::Greater)
}

/// Build a value vector from anything displayable as text
pub fn values<I, T>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordering_beats_lexicographic() {
        assert_eq!(Value::from("9").compare(&Value::from("10")), Ordering::Less);
        assert_eq!(Value::from("b").compare(&Value::from("a")), Ordering::Greater);
        // mixed falls back to text
        assert_eq!(Value::from("10").compare(&Value::from("a")), Ordering::Less);
    }

    #[test]
    fn test_matches_is_textual() {
        assert!(Value::from("7").matches(&Value::from(7)));
        assert!(!Value::from("7.0").matches(&Value::from("7")));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&values([1, 2, 2, 10])));
        assert!(!is_sorted(&values(["10", "9"])));
        assert!(is_sorted(&[]));
    }

    #[test]
    fn test_display_quotes_text() {
        assert_eq!(Value::from("A").to_string(), "\"A\"");
        assert_eq!(Value::blank().to_string(), "\"\"");
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        assert!(Value::blank().is_blank());
        assert!(Value::from(" \t ").is_blank());
        assert!(!Value::from(" 0 ").is_blank());
    }
}

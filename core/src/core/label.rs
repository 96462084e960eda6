// pipesmith/src/core/label.rs

//! Scalar metadata attached to step options and matched by label-based conditions.

use std::collections::HashMap;
use std::fmt;

/// A label-set: text keys mapped to scalar values.
pub type Labels = HashMap<String, LabelValue>;

/// A scalar label value. Nested structures are not representable.
///
/// Matching is exact equality on the variant and its payload, so `Int(1)`
/// never matches `Float(1.0)` and `Text("true")` never matches `Bool(true)`.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
  Bool(bool),
  Text(String),
  Int(i64),
  Float(f64),
}

impl fmt::Display for LabelValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LabelValue::Bool(b) => write!(f, "{}", b),
      LabelValue::Text(s) => write!(f, "{:?}", s),
      LabelValue::Int(i) => write!(f, "{}", i),
      LabelValue::Float(x) => write!(f, "{}", x),
    }
  }
}

impl From<bool> for LabelValue {
  fn from(b: bool) -> Self {
    LabelValue::Bool(b)
  }
}

impl From<&str> for LabelValue {
  fn from(s: &str) -> Self {
    LabelValue::Text(s.to_string())
  }
}

impl From<String> for LabelValue {
  fn from(s: String) -> Self {
    LabelValue::Text(s)
  }
}

impl From<i64> for LabelValue {
  fn from(i: i64) -> Self {
    LabelValue::Int(i)
  }
}

impl From<i32> for LabelValue {
  fn from(i: i32) -> Self {
    LabelValue::Int(i64::from(i))
  }
}

impl From<f64> for LabelValue {
  fn from(x: f64) -> Self {
    LabelValue::Float(x)
  }
}

/// A single key/value pair a label-based condition looks for.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMatch {
  pub key: String,
  pub value: LabelValue,
}

impl LabelMatch {
  pub fn new(key: impl Into<String>, value: impl Into<LabelValue>) -> Self {
    Self {
      key: key.into(),
      value: value.into(),
    }
  }

  /// True when `labels` carries this key with an equal value. Absent keys never match.
  pub fn matches(&self, labels: &Labels) -> bool {
    labels.get(&self.key).map_or(false, |v| *v == self.value)
  }
}

impl<K: Into<String>, V: Into<LabelValue>> From<(K, V)> for LabelMatch {
  fn from((key, value): (K, V)) -> Self {
    LabelMatch::new(key, value)
  }
}

impl fmt::Display for LabelMatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.key, self.value)
  }
}

//! Resource entries and the fixed-point scalar model.
//!
//! Scalar quantities are only guaranteed to three decimal digits. Each
//! [`Scalar`] stores thousandths as an integer so sums and remainder checks
//! happen in scaled-integer space, never on raw `f64` values.

use std::ops::Add;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the GPU resource.
pub const GPUS: &str = "gpus";

/// Fixed-point scale: one unit is `SCALE` thousandths.
pub const SCALE: i64 = 1000;

/// Rejected wire value for a [`Scalar`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalarError {
    #[error("scalar value {0} is not a finite number")]
    NotFinite(f64),

    #[error("scalar value {0} is out of range")]
    OutOfRange(f64),
}

/// A scalar quantity held in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ScalarWire", into = "ScalarWire")]
pub struct Scalar {
    millis: i64,
}

#[derive(Serialize, Deserialize)]
struct ScalarWire {
    value: f64,
}

impl Scalar {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Converts a wire value, rounding to the nearest thousandth.
    ///
    /// # Errors
    ///
    /// Returns an error for NaN, infinities, and values whose scaled form
    /// does not fit in an `i64`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_f64(value: f64) -> Result<Self, ScalarError> {
        if !value.is_finite() {
            return Err(ScalarError::NotFinite(value));
        }
        let scaled = (value * SCALE as f64).round();
        if scaled >= i64::MAX as f64 || scaled <= i64::MIN as f64 {
            return Err(ScalarError::OutOfRange(value));
        }
        Ok(Self {
            millis: scaled as i64,
        })
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.millis
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self) -> f64 {
        self.millis as f64 / SCALE as f64
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            millis: self.millis.saturating_add(rhs.millis),
        }
    }
}

impl TryFrom<ScalarWire> for Scalar {
    type Error = ScalarError;

    fn try_from(wire: ScalarWire) -> Result<Self, Self::Error> {
        Self::from_f64(wire.value)
    }
}

impl From<Scalar> for ScalarWire {
    fn from(scalar: Scalar) -> Self {
        Self {
            value: scalar.value(),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.millis / SCALE;
        let frac = (self.millis % SCALE).abs();
        if self.millis < 0 && whole == 0 {
            write!(f, "-0.{frac:03}")
        } else {
            write!(f, "{whole}.{frac:03}")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Scalar,
    Ranges,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub begin: u64,
    pub end: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ranges {
    #[serde(default)]
    pub range: Vec<Range>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueSet {
    #[serde(default)]
    pub item: Vec<String>,
}

/// One named resource offered by an agent or requested by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Ranges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<ValueSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Resource {
    #[must_use]
    pub fn scalar(name: impl Into<String>, quantity: Scalar) -> Self {
        Self {
            name: name.into(),
            kind: ValueType::Scalar,
            scalar: Some(quantity),
            ranges: None,
            set: None,
            role: None,
        }
    }
}

/// A list of resources, serialized as a bare sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceList(Vec<Resource>);

impl ResourceList {
    #[must_use]
    pub fn new(resources: Vec<Resource>) -> Self {
        Self(resources)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of every scalar entry named `name`, or `None` if there is none.
    ///
    /// Entries of another value type with the same name are ignored.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<Scalar> {
        self.0
            .iter()
            .filter(|r| r.name == name && r.kind == ValueType::Scalar)
            .filter_map(|r| r.scalar)
            .reduce(|acc, s| acc + s)
    }

    #[must_use]
    pub fn gpus(&self) -> Option<Scalar> {
        self.scalar(GPUS)
    }
}

impl From<Vec<Resource>> for ResourceList {
    fn from(resources: Vec<Resource>) -> Self {
        Self(resources)
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

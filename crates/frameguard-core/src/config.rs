//! Validation configuration.
//!
//! A [`ValidationConfig`] bundles the three independent rule sets (schema,
//! null policy, ranges). It is built once through
//! [`ValidationConfigBuilder`] and never mutated afterwards.

use crate::columns::{ColumnType, NumericType};
use crate::types::Value;

/// Expected element type per column, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaSpec {
    columns: Vec<(String, ColumnType)>,
}

impl SchemaSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column. Re-declaring a column replaces its type and keeps
    /// its original position.
    pub fn insert(&mut self, name: impl Into<String>, column_type: ColumnType) {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column_type,
            None => self.columns.push((name, column_type)),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.insert(name, column_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns.iter().map(|(n, t)| (n.as_str(), *t))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ColumnType)> for SchemaSpec {
    fn from_iter<I: IntoIterator<Item = (S, ColumnType)>>(iter: I) -> Self {
        let mut schema = SchemaSpec::new();
        for (name, column_type) in iter {
            schema.insert(name, column_type);
        }
        schema
    }
}

/// Columns allowed to contain missing values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullPolicy {
    allowed: Vec<String>,
}

impl NullPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.allowed.contains(&name) {
            self.allowed.push(name);
        }
    }

    pub fn allows(&self, name: &str) -> bool {
        self.allowed.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NullPolicy {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut policy = NullPolicy::new();
        for name in iter {
            policy.insert(name);
        }
        policy
    }
}

/// Inclusive numeric bounds; an absent side is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<Value>,
    pub max: Option<Value>,
}

impl Bounds {
    pub fn between<T: NumericType>(min: T, max: T) -> Self {
        Self {
            min: Some(min.to_value()),
            max: Some(max.to_value()),
        }
    }

    pub fn at_least<T: NumericType>(min: T) -> Self {
        Self {
            min: Some(min.to_value()),
            max: None,
        }
    }

    pub fn at_most<T: NumericType>(max: T) -> Self {
        Self {
            min: None,
            max: Some(max.to_value()),
        }
    }
}

/// Bounds per column, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSpec {
    ranges: Vec<(String, Bounds)>,
}

impl RangeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounds of a column, replacing previous ones in place.
    pub fn insert(&mut self, name: impl Into<String>, bounds: Bounds) {
        *self.bounds_mut(name.into()) = bounds;
    }

    pub fn with_range(mut self, name: impl Into<String>, bounds: Bounds) -> Self {
        self.insert(name, bounds);
        self
    }

    pub fn set_min<T: NumericType>(&mut self, name: impl Into<String>, min: T) {
        self.bounds_mut(name.into()).min = Some(min.to_value());
    }

    pub fn set_max<T: NumericType>(&mut self, name: impl Into<String>, max: T) {
        self.bounds_mut(name.into()).max = Some(max.to_value());
    }

    pub fn get(&self, name: &str) -> Option<&Bounds> {
        self.ranges
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bounds)> {
        self.ranges.iter().map(|(n, b)| (n.as_str(), b))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    fn bounds_mut(&mut self, name: String) -> &mut Bounds {
        let idx = match self.ranges.iter().position(|(n, _)| *n == name) {
            Some(idx) => idx,
            None => {
                self.ranges.push((name, Bounds::default()));
                self.ranges.len() - 1
            }
        };
        &mut self.ranges[idx].1
    }
}

impl<S: Into<String>> FromIterator<(S, Bounds)> for RangeSpec {
    fn from_iter<I: IntoIterator<Item = (S, Bounds)>>(iter: I) -> Self {
        let mut ranges = RangeSpec::new();
        for (name, bounds) in iter {
            ranges.insert(name, bounds);
        }
        ranges
    }
}

/// The full rule set applied by [`crate::Validator`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationConfig {
    schema: SchemaSpec,
    allow_null: NullPolicy,
    ranges: RangeSpec,
}

impl ValidationConfig {
    pub fn new(schema: SchemaSpec, allow_null: NullPolicy, ranges: RangeSpec) -> Self {
        Self {
            schema,
            allow_null,
            ranges,
        }
    }

    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::new()
    }

    pub fn schema(&self) -> &SchemaSpec {
        &self.schema
    }

    pub fn allow_null(&self) -> &NullPolicy {
        &self.allow_null
    }

    pub fn ranges(&self) -> &RangeSpec {
        &self.ranges
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationConfigBuilder {
    schema: SchemaSpec,
    allow_null: NullPolicy,
    ranges: RangeSpec,
}

impl ValidationConfigBuilder {
    /// Create a new [`ValidationConfigBuilder`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a [`ValidationConfig`]
    pub fn build(self) -> ValidationConfig {
        ValidationConfig {
            schema: self.schema,
            allow_null: self.allow_null,
            ranges: self.ranges,
        }
    }

    pub fn with_schema(self, schema: SchemaSpec) -> Self {
        Self { schema, ..self }
    }

    pub fn with_null_policy(self, allow_null: NullPolicy) -> Self {
        Self { allow_null, ..self }
    }

    pub fn with_ranges(self, ranges: RangeSpec) -> Self {
        Self { ranges, ..self }
    }

    /// Declare the expected type of a column
    pub fn with_column_type(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.schema.insert(name, column_type);
        self
    }

    /// Allow missing values in a column
    pub fn allow_null(mut self, name: impl Into<String>) -> Self {
        self.allow_null.insert(name);
        self
    }

    /// Set numeric range (both min and max)
    pub fn between<T: NumericType>(mut self, name: impl Into<String>, min: T, max: T) -> Self {
        self.ranges.insert(name, Bounds::between(min, max));
        self
    }

    /// Set minimum value
    pub fn min<T: NumericType>(mut self, name: impl Into<String>, min: T) -> Self {
        self.ranges.set_min(name, min);
        self
    }

    /// Set maximum value
    pub fn max<T: NumericType>(mut self, name: impl Into<String>, max: T) -> Self {
        self.ranges.set_max(name, max);
        self
    }
}

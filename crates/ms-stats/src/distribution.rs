//! Probability mass function representation and validation.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::error::{StatError, StatResult};

/// Allowed drift of the probability sum from 1.
///
/// Exact equality rejects distributions like three outcomes of 1/3
/// each, which cannot sum to exactly 1 in binary floating point.
pub const PROB_SUM_TOLERANCE: f64 = 1e-9;

/// A discrete probability mass function: outcome value → probability.
///
/// Outcomes are unique by construction; inserting a duplicate outcome
/// overwrites the earlier probability, matching mapping semantics.
/// Iteration order is ascending by outcome value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    entries: BTreeMap<OrderedFloat<f64>, f64>,
}

impl Distribution {
    /// Build from `(outcome, probability)` pairs. Later duplicates
    /// overwrite earlier entries; no validation happens here.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let entries = entries
            .into_iter()
            .map(|(x, p)| (OrderedFloat(x), p))
            .collect();
        Self { entries }
    }

    /// Build from a dynamic JSON value, the boundary where shape errors
    /// can still occur.
    ///
    /// Fails with [`StatError::Type`] when the value is not an object,
    /// and with [`StatError::Value`] when a key does not parse as a
    /// number or a probability is not a number.
    pub fn from_value(value: &Value) -> StatResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(StatError::Type {
                    found: json_type_name(other),
                });
            }
        };

        let mut entries = BTreeMap::new();
        for (key, val) in map {
            let outcome: f64 = key.trim().parse().map_err(|_| {
                StatError::value(format!("outcome '{key}' is not a number"))
            })?;
            let prob = val.as_f64().ok_or_else(|| {
                StatError::value(format!("probability for outcome {outcome} is not a number"))
            })?;
            entries.insert(OrderedFloat(outcome), prob);
        }
        Ok(Self { entries })
    }

    /// Check that this is a well-formed probability mass function.
    ///
    /// Rejects non-finite outcomes or probabilities, negative
    /// probabilities, and probability sums outside
    /// `1 ± PROB_SUM_TOLERANCE`. An empty distribution fails the sum
    /// check.
    pub fn validate(&self) -> StatResult<()> {
        for (x, p) in self.iter() {
            if !x.is_finite() {
                return Err(StatError::value(format!("outcome {x} is not finite")));
            }
            if !p.is_finite() {
                return Err(StatError::value(format!(
                    "probability {p} for outcome {x} is not finite"
                )));
            }
            if p < 0.0 {
                return Err(StatError::value(format!(
                    "probability must be non-negative, got {p} for outcome {x}"
                )));
            }
        }

        let sum: f64 = self.entries.values().sum();
        if (sum - 1.0).abs() > PROB_SUM_TOLERANCE {
            return Err(StatError::value(format!(
                "probabilities must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }

    /// Iterate `(outcome, probability)` pairs in ascending outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().map(|(x, p)| (x.into_inner(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(f64, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

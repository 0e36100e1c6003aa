//! Discrete distribution statistics.
//!
//! A [`Distribution`] is a probability mass function given as a mapping
//! from outcome value to probability. The moment functions validate the
//! distribution before computing anything and surface problems as
//! [`StatError`] values.

pub mod distribution;
pub mod error;
pub mod moments;

pub use distribution::{Distribution, PROB_SUM_TOLERANCE};
pub use error::{StatError, StatResult};
pub use moments::{expectation, standard_deviation, variance};

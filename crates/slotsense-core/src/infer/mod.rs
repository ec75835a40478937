//! Setting inference over observed symbol counts.
//!
//! This module is composed of:
//! - `binomial`: log-domain binomial likelihood primitives.
//! - `engine`: the posterior computation over candidate settings.
//! - `verdict`: threshold classification layered on the engine's output.

pub mod binomial;
pub mod engine;
pub mod verdict;

pub use binomial::{binomial_cdf, binomial_pmf};
pub use engine::{SettingProbability, calculate_setting_probabilities};
pub use verdict::{Verdict, summarize};

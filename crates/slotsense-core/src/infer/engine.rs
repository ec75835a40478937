//! Posterior computation over candidate settings.
//!
//! Each role with a setting-dependent rate contributes a binomial
//! log-likelihood for its observed count; per-setting totals are max-shifted
//! before exponentiation so the relative proportions survive even when every
//! absolute likelihood is astronomically small.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::binomial::log_binomial_coefficient;
use crate::model::role::Role;
use crate::model::setting::Setting;

/// One row of the engine's output: the posterior for a single candidate
/// setting, plus the max-shifted (pre-normalization) likelihood kept for
/// diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingProbability {
    pub setting_id: String,
    pub setting_name: String,
    pub probability: f64,
    pub likelihood: f64,
}

/// Posterior distribution over `settings` given the observed counts.
///
/// `total_games` is the effective window (the caller may subtract a starting
/// counter reading, so it can legitimately be non-positive); with no games
/// played every setting is equally plausible and the uniform distribution is
/// returned without touching any logarithm. Roles without a setting
/// difference, and role/setting pairs whose rate is missing or outside
/// `(0, 1)`, contribute no evidence.
///
/// Output preserves the order of `settings`. The result is recomputed in full
/// on every call; nothing is cached across invocations.
pub fn calculate_setting_probabilities(
    total_games: i64,
    roles: &[Role],
    counts: &BTreeMap<String, u32>,
    settings: &[Setting],
) -> Vec<SettingProbability> {
    if settings.is_empty() {
        return Vec::new();
    }

    if total_games <= 0 {
        let equal_probability = 1.0 / settings.len() as f64;
        return settings
            .iter()
            .map(|setting| SettingProbability {
                setting_id: setting.id.clone(),
                setting_name: setting.name.clone(),
                probability: equal_probability,
                likelihood: 1.0,
            })
            .collect();
    }

    let mut log_likelihoods = Vec::with_capacity(settings.len());
    for setting in settings {
        let mut log_likelihood = 0.0;
        for role in roles {
            if !role.has_setting_diff {
                continue;
            }
            let Some(p) = role.probability_for(&setting.id) else {
                continue;
            };
            // Rates at or beyond the boundaries mean "no data" for this pair
            // and would blow up ln(p) or ln(1-p).
            if p <= 0.0 || p >= 1.0 {
                continue;
            }

            let k = i64::from(counts.get(&role.id).copied().unwrap_or(0));
            log_likelihood += log_binomial_coefficient(total_games, k);
            log_likelihood += k as f64 * p.ln() + (total_games - k) as f64 * (1.0 - p).ln();
        }
        log_likelihoods.push(log_likelihood);
    }

    // Shift by the maximum before exponentiating so the best candidate maps
    // to exp(0) and the rest keep their true ratios to it.
    let max_log_likelihood = log_likelihoods
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let likelihoods: Vec<f64> = log_likelihoods
        .iter()
        .map(|ll| (ll - max_log_likelihood).exp())
        .collect();
    let total_likelihood: f64 = likelihoods.iter().sum();

    let equal_probability = 1.0 / settings.len() as f64;
    settings
        .iter()
        .zip(likelihoods)
        .map(|(setting, likelihood)| SettingProbability {
            setting_id: setting.id.clone(),
            setting_name: setting.name.clone(),
            probability: if total_likelihood > 0.0 {
                likelihood / total_likelihood
            } else {
                equal_probability
            },
            likelihood,
        })
        .collect()
}

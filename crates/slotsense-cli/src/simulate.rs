//! Synthetic session generation for a known true setting.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use slotsense_core::model::machine::MachineData;

#[derive(Debug, Error)]
pub enum SimulateError {
    #[error("machine '{machine}' has no setting '{setting}'")]
    UnknownSetting { machine: String, setting: String },
}

/// Draws per-role occurrence counts over `games` trials at the chosen
/// setting's published rates. Roles that carry no usable rate for the
/// setting produce a zero count, mirroring what the engine would skip.
pub fn simulate_counts(
    machine: &MachineData,
    setting_id: &str,
    games: i64,
    seed: u64,
) -> Result<BTreeMap<String, u32>, SimulateError> {
    if !machine.settings.iter().any(|s| s.id == setting_id) {
        return Err(SimulateError::UnknownSetting {
            machine: machine.name.clone(),
            setting: setting_id.to_string(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = BTreeMap::new();

    for role in &machine.roles {
        let rate = role.probability_for(setting_id).unwrap_or(0.0);
        let mut count = 0u32;
        if role.has_setting_diff && rate > 0.0 && rate < 1.0 {
            for _ in 0..games.max(0) {
                if rng.gen_bool(rate) {
                    count += 1;
                }
            }
        }
        debug!(role = %role.id, count, "simulated role count");
        counts.insert(role.id.clone(), count);
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotsense_core::model::machine::preset_machines;

    #[test]
    fn unknown_setting_is_rejected() {
        let machine = &preset_machines()[0];
        assert!(simulate_counts(machine, "9", 1000, 7).is_err());
    }

    #[test]
    fn counts_are_deterministic_per_seed() {
        let machine = &preset_machines()[0];
        let a = simulate_counts(machine, "6", 2000, 42).unwrap();
        let b = simulate_counts(machine, "6", 2000, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn counts_track_the_published_rate() {
        let machine = &preset_machines()[0];
        let counts = simulate_counts(machine, "6", 10_000, 7).unwrap();
        // Grape at 1/6.18 over 10k games: expect ~1618, allow wide slack.
        let grape = *counts.get("grape").unwrap();
        assert!((1300..=1900).contains(&grape), "grape count {grape} implausible");
    }

    #[test]
    fn zero_games_yield_zero_counts() {
        let machine = &preset_machines()[0];
        let counts = simulate_counts(machine, "1", 0, 7).unwrap();
        assert!(counts.values().all(|count| *count == 0));
    }
}

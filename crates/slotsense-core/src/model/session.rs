//! Caller-owned observation state for one counting session.
//!
//! The UI (or harness) mutates counts and the game counter between inference
//! calls; [`CountSession::update_results`] then recomputes the posterior from
//! scratch over the effective window. The engine itself never sees this type,
//! only an immutable snapshot of its fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::infer::engine::{SettingProbability, calculate_setting_probabilities};
use crate::model::machine::MachineData;
use crate::rate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountSession {
    pub machine_id: String,
    pub machine_name: String,
    /// Current reading of the machine's game counter.
    pub total_games: u32,
    /// Counter reading when the session began; games before it are not ours.
    pub start_games: u32,
    pub counts: BTreeMap<String, u32>,
    pub results: Vec<SettingProbability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl CountSession {
    /// Opens a session on `machine` with zeroed counts and a uniform
    /// posterior.
    pub fn start(machine: &MachineData, start_games: u32) -> Self {
        let counts: BTreeMap<String, u32> = machine
            .roles
            .iter()
            .map(|role| (role.id.clone(), 0))
            .collect();
        let results =
            calculate_setting_probabilities(0, &machine.roles, &counts, &machine.settings);

        Self {
            machine_id: machine.id.clone(),
            machine_name: machine.name.clone(),
            total_games: start_games,
            start_games,
            counts,
            results,
            memo: None,
        }
    }

    /// Games actually observed by this session. Signed: the operator can set
    /// the counter below the starting reading, which the engine treats the
    /// same as no games.
    pub fn effective_games(&self) -> i64 {
        i64::from(self.total_games) - i64::from(self.start_games)
    }

    pub fn set_game_count(&mut self, total_games: u32) {
        self.total_games = total_games;
    }

    pub fn increment_count(&mut self, role_id: &str) {
        *self.counts.entry(role_id.to_string()).or_insert(0) += 1;
    }

    pub fn decrement_count(&mut self, role_id: &str) {
        if let Some(count) = self.counts.get_mut(role_id) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn set_count(&mut self, role_id: &str, count: u32) {
        self.counts.insert(role_id.to_string(), count);
    }

    pub fn count(&self, role_id: &str) -> u32 {
        self.counts.get(role_id).copied().unwrap_or(0)
    }

    /// Zeroes the game counter and every count, resetting cached results to
    /// uniform without needing the machine definition.
    pub fn reset_counts(&mut self) {
        self.total_games = 0;
        for count in self.counts.values_mut() {
            *count = 0;
        }
        if !self.results.is_empty() {
            let equal_probability = 1.0 / self.results.len() as f64;
            for row in &mut self.results {
                row.probability = equal_probability;
                row.likelihood = 1.0;
            }
        }
    }

    /// Recomputes the posterior over the effective window. Always a full
    /// recompute; prior results are discarded.
    pub fn update_results(&mut self, machine: &MachineData) {
        self.results = calculate_setting_probabilities(
            self.effective_games(),
            &machine.roles,
            &self.counts,
            &machine.settings,
        );
    }

    /// Observed rate for a role over the effective window.
    pub fn current_rate(&self, role_id: &str) -> f64 {
        rate::current_probability(self.count(role_id), self.effective_games())
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = Some(memo.into());
    }
}

//! Coarse classification of a posterior distribution for display.

use super::engine::SettingProbability;

/// Human-facing verdict: a short label and the accent color to render it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub label: &'static str,
    pub color: &'static str,
}

/// Buckets the posterior mass into high settings (numeric id 5 and up) and
/// low settings (numeric id 2 and down), then applies threshold rules in
/// order. Settings with non-numeric ids land in neither bucket.
pub fn summarize(results: &[SettingProbability]) -> Verdict {
    if results.is_empty() {
        return Verdict {
            label: "insufficient data",
            color: "#888888",
        };
    }

    let high_mass = bucket_mass(results, |id| id >= 5);
    let low_mass = bucket_mass(results, |id| id <= 2);

    if high_mass >= 0.7 {
        Verdict {
            label: "high setting likely",
            color: "#4CAF50",
        }
    } else if high_mass >= 0.5 {
        Verdict {
            label: "high setting possible",
            color: "#8BC34A",
        }
    } else if low_mass >= 0.7 {
        Verdict {
            label: "low setting possible",
            color: "#F44336",
        }
    } else if low_mass >= 0.5 {
        Verdict {
            label: "leaning low setting",
            color: "#FF9800",
        }
    } else {
        Verdict {
            label: "still determining",
            color: "#2196F3",
        }
    }
}

fn bucket_mass(results: &[SettingProbability], in_bucket: impl Fn(i64) -> bool) -> f64 {
    results
        .iter()
        .filter(|row| {
            row.setting_id
                .parse::<i64>()
                .ok()
                .is_some_and(|id| in_bucket(id))
        })
        .map(|row| row.probability)
        .sum()
}

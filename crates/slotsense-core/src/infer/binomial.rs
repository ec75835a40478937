//! Binomial distribution primitives computed in log-space.
//!
//! Session windows run into the thousands of games, so `C(n,k) * p^k *
//! (1-p)^(n-k)` evaluated directly overflows the coefficient and underflows
//! the power terms long before realistic inputs are reached. Everything here
//! accumulates logarithms and exponentiates once at the end.

/// `ln(C(n, k))` via the incremental sum `Σ ln(n-i) - ln(i+1)` for
/// `i in 0..k`, avoiding factorials entirely.
///
/// Callers guarantee `0 <= k <= n`; outside that range the sum walks through
/// `ln` of non-positive values and the result is unspecified.
pub(crate) fn log_binomial_coefficient(n: i64, k: i64) -> f64 {
    let mut log_coefficient = 0.0;
    for i in 0..k {
        log_coefficient += ((n - i) as f64).ln() - ((i + 1) as f64).ln();
    }
    log_coefficient
}

/// Probability of exactly `k` successes in `n` trials with per-trial success
/// probability `p`.
///
/// Out-of-domain input (`k < 0`, `k > n`, `p` outside `[0, 1]`) yields 0.
/// Degenerate trial counts and boundary probabilities resolve to their exact
/// point masses before any logarithm is taken.
pub fn binomial_pmf(k: i64, n: i64, p: f64) -> f64 {
    if k < 0 || k > n || p < 0.0 || p > 1.0 {
        return 0.0;
    }
    if n == 0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }

    let mut log_prob = log_binomial_coefficient(n, k);
    log_prob += k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln();
    log_prob.exp()
}

/// `P(X <= k)` by direct summation of the PMF. Observed counts stay small
/// (a few dozen per session), so no closed form is needed.
pub fn binomial_cdf(k: i64, n: i64, p: f64) -> f64 {
    let mut sum = 0.0;
    for i in 0..=k {
        sum += binomial_pmf(i, n, p);
    }
    sum
}

//! Split-size arithmetic.
//!
//! tmux can only split the current pane in two, so a container with `n`
//! children is built from `n - 1` binary splits. Split `i` (1-based) divides
//! the space still holding children `i - 1 ..` into the existing pane (child
//! `i - 1`) and a new pane that later receives children `i ..`. The percentage
//! passed to `split-window -p` is the new pane's share of that space.
//!
//! Weights are never normalized or clamped. Negative, zero and NaN weights
//! flow through the same arithmetic and may produce degenerate percentages.

use std::fmt;

/// Percentage handed to `split-window -p`, already rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPercent(f64);

impl SplitPercent {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SplitPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            // Rounded already; the cast also folds -0 into 0.
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Percentages for every split of a container with `pane_count` children.
///
/// Without `ratio` every child gets the same weight. With `ratio` the caller
/// guarantees `ratio.len() == pane_count`.
pub fn split_percentages(ratio: Option<&[f64]>, pane_count: usize) -> Vec<SplitPercent> {
    let equal;
    let weights = match ratio {
        Some(weights) => weights,
        None => {
            equal = vec![1.0; pane_count];
            &equal
        }
    };

    (1..pane_count)
        .map(|split| SplitPercent(round_half_up(new_pane_share(weights, split))))
        .collect()
}

/// Unrounded new-pane share (in percent) for split number `split`.
fn new_pane_share(weights: &[f64], split: usize) -> f64 {
    if split == 1 {
        let total: f64 = weights.iter().sum();
        (total - weights[0]) / total * 100.0
    } else {
        let current_space: f64 = weights[split - 1..].iter().sum();
        let new_pane: f64 = weights[split..].iter().sum();
        new_pane / current_space * 100.0
    }
}

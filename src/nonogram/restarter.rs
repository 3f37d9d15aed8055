#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Restart policies for the local search.
//!
//! A restart throws away the current grid and re-randomises, the standard
//! escape hatch when greedy repair has dug itself into a local minimum.
//! The policy decides when; the solver reports after every flip whether the
//! best error since the last restart improved.

use std::fmt::Debug;

/// Decides when the local search should abandon its grid and re-randomise.
pub trait RestartPolicy: Debug + Clone {
    /// Creates the policy. `threshold` is interpreted per implementation.
    fn new(threshold: usize) -> Self;

    /// Records the outcome of one iteration. Returns `true` when the solver
    /// should restart now; the policy resets its own state when it fires.
    fn note(&mut self, improved: bool) -> bool;

    /// Total restarts triggered so far.
    fn num_restarts(&self) -> usize;
}

/// Restart after `threshold` consecutive iterations without improvement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stagnation {
    threshold: usize,
    since_improvement: usize,
    restarts: usize,
}

impl RestartPolicy for Stagnation {
    fn new(threshold: usize) -> Self {
        Self {
            threshold,
            since_improvement: 0,
            restarts: 0,
        }
    }

    fn note(&mut self, improved: bool) -> bool {
        if improved {
            self.since_improvement = 0;
            return false;
        }
        self.since_improvement += 1;
        if self.since_improvement > self.threshold {
            self.since_improvement = 0;
            self.restarts += 1;
            return true;
        }
        false
    }

    fn num_restarts(&self) -> usize {
        self.restarts
    }
}

/// Never restarts; pure greedy descent with noise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Never;

impl RestartPolicy for Never {
    fn new(_: usize) -> Self {
        Self
    }

    fn note(&mut self, _: bool) -> bool {
        false
    }

    fn num_restarts(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagnation_fires_after_threshold() {
        let mut policy = Stagnation::new(2);
        assert!(!policy.note(false));
        assert!(!policy.note(false));
        assert!(policy.note(false));
        assert_eq!(policy.num_restarts(), 1);
    }

    #[test]
    fn test_improvement_resets_counter() {
        let mut policy = Stagnation::new(2);
        assert!(!policy.note(false));
        assert!(!policy.note(false));
        assert!(!policy.note(true));
        assert!(!policy.note(false));
        assert!(!policy.note(false));
        assert!(policy.note(false));
    }

    #[test]
    fn test_never() {
        let mut policy = Never::new(0);
        for _ in 0..1000 {
            assert!(!policy.note(false));
        }
        assert_eq!(policy.num_restarts(), 0);
    }
}

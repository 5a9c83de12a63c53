//! Micro-benchmark harness
//!
//! Times tree construction and nothing else: the measured region invokes a
//! builder `number` times and discards each result through `black_box`, and
//! `repeat` such trials are reduced to their minimum total elapsed time.
//! Minimum rather than mean, so scheduler noise can only inflate the trials
//! that get thrown away.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::rule::ChildRule;
use crate::tree::Strategy;
use crate::{build_tree, TreeError};

/// Trial shape for one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchOptions {
    /// Independent trials per measurement; the minimum total time is kept.
    pub repeat: u32,

    /// Builds per trial, amortizing per-call overhead for fast configurations.
    pub number: u32,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            repeat: 5,
            number: 1,
        }
    }
}

impl BenchOptions {
    fn validate(&self) -> Result<(), TreeError> {
        if self.repeat < 1 {
            return Err(TreeError::InvalidRepeat(self.repeat));
        }
        if self.number < 1 {
            return Err(TreeError::InvalidNumber(self.number));
        }
        Ok(())
    }
}

/// One side of a comparison: a strategy plus the rule variant driving it.
///
/// The rule is borrowed for the whole run, so a memoized rule stays warm
/// across every height and trial of the comparison - deliberately part of
/// what is under test.
pub struct Contender<'a> {
    /// Series name used by the report sink.
    pub label: &'a str,

    /// Construction strategy to time.
    pub strategy: Strategy,

    /// Child rule variant, plain or memoized.
    pub rule: &'a mut dyn ChildRule,
}

impl fmt::Debug for Contender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contender")
            .field("label", &self.label)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// Paired timing for one height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Sample {
    /// Tree height this sample measured.
    pub height: i32,

    /// Representative duration for contender A.
    pub duration_a: Duration,

    /// Representative duration for contender B.
    pub duration_b: Duration,
}

/// Run the comparison across `heights`, in the order given.
///
/// Each height is measured independently for A and then B, and the pair lands
/// in one [`Sample`]; output order matches input order, with no reordering or
/// deduplication. Every height is validated up front, so an invalid
/// configuration aborts before any timing happens and no partial sample list
/// escapes. An error from a builder inside the timed loop still propagates
/// uncaught - there is no partial-result recovery.
pub fn benchmark(
    root: i64,
    heights: &[i32],
    a: Contender<'_>,
    b: Contender<'_>,
    opts: &BenchOptions,
) -> Result<Vec<Sample>, TreeError> {
    opts.validate()?;
    if heights.is_empty() {
        return Err(TreeError::EmptyHeights);
    }
    if let Some(&bad) = heights.iter().find(|&&h| h < 1) {
        return Err(TreeError::InvalidHeight(bad));
    }

    let Contender {
        label: label_a,
        strategy: strategy_a,
        rule: rule_a,
    } = a;
    let Contender {
        label: label_b,
        strategy: strategy_b,
        rule: rule_b,
    } = b;

    let mut samples = Vec::with_capacity(heights.len());
    for &height in heights {
        let duration_a = time_builder(root, height, strategy_a, rule_a, opts)?;
        let duration_b = time_builder(root, height, strategy_b, rule_b, opts)?;
        debug!(
            height,
            a = label_a,
            secs_a = duration_a.as_secs_f64(),
            b = label_b,
            secs_b = duration_b.as_secs_f64(),
            "height measured"
        );
        samples.push(Sample {
            height,
            duration_a,
            duration_b,
        });
    }

    Ok(samples)
}

/// Minimum total elapsed time over `repeat` trials of `number` builds each.
///
/// The thunk setup (strategy, rule, arguments) happens out here; the timed
/// region contains only construction and the `black_box` sink.
fn time_builder(
    root: i64,
    height: i32,
    strategy: Strategy,
    rule: &mut dyn ChildRule,
    opts: &BenchOptions,
) -> Result<Duration, TreeError> {
    let mut best: Option<Duration> = None;

    for _ in 0..opts.repeat {
        let start = Instant::now();
        for _ in 0..opts.number {
            let tree = build_tree(root, height, strategy, rule)?;
            black_box(&tree);
        }
        let elapsed = start.elapsed();

        best = Some(match best {
            Some(current) if current <= elapsed => current,
            _ => elapsed,
        });
    }

    // repeat >= 1 was validated, so at least one trial ran
    best.ok_or(TreeError::InvalidRepeat(opts.repeat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::ArithmeticRule;

    fn quick_opts() -> BenchOptions {
        BenchOptions {
            repeat: 2,
            number: 1,
        }
    }

    fn contenders<'a>(
        rule_a: &'a mut ArithmeticRule,
        rule_b: &'a mut ArithmeticRule,
    ) -> (Contender<'a>, Contender<'a>) {
        (
            Contender {
                label: "recursive",
                strategy: Strategy::Recursive,
                rule: rule_a,
            },
            Contender {
                label: "iterative",
                strategy: Strategy::Iterative,
                rule: rule_b,
            },
        )
    }

    #[test]
    fn test_sample_order_matches_height_order() {
        let (mut rule_a, mut rule_b) = (ArithmeticRule, ArithmeticRule);
        let (a, b) = contenders(&mut rule_a, &mut rule_b);
        let heights = [5, 2, 2, 4];

        let samples = benchmark(14, &heights, a, b, &quick_opts()).unwrap();

        let measured: Vec<i32> = samples.iter().map(|s| s.height).collect();
        assert_eq!(measured, heights);
    }

    #[test]
    fn test_empty_heights_rejected() {
        let (mut rule_a, mut rule_b) = (ArithmeticRule, ArithmeticRule);
        let (a, b) = contenders(&mut rule_a, &mut rule_b);
        let err = benchmark(14, &[], a, b, &quick_opts()).unwrap_err();
        assert_eq!(err, TreeError::EmptyHeights);
    }

    #[test]
    fn test_invalid_height_aborts_whole_run() {
        let (mut rule_a, mut rule_b) = (ArithmeticRule, ArithmeticRule);
        let (a, b) = contenders(&mut rule_a, &mut rule_b);
        let err = benchmark(14, &[3, 0, 5], a, b, &quick_opts()).unwrap_err();
        assert_eq!(err, TreeError::InvalidHeight(0));
    }

    #[test]
    fn test_degenerate_options_rejected() {
        let (mut rule_a, mut rule_b) = (ArithmeticRule, ArithmeticRule);
        let (a, b) = contenders(&mut rule_a, &mut rule_b);
        let opts = BenchOptions {
            repeat: 0,
            number: 1,
        };
        assert_eq!(
            benchmark(14, &[3], a, b, &opts).unwrap_err(),
            TreeError::InvalidRepeat(0)
        );

        let (mut rule_a, mut rule_b) = (ArithmeticRule, ArithmeticRule);
        let (a, b) = contenders(&mut rule_a, &mut rule_b);
        let opts = BenchOptions {
            repeat: 1,
            number: 0,
        };
        assert_eq!(
            benchmark(14, &[3], a, b, &opts).unwrap_err(),
            TreeError::InvalidNumber(0)
        );
    }
}

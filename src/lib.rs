//! # Synthetic binary tree builders under a timing lens
//!
//! This library grows a full binary tree from a single root value by an
//! arithmetic child rule, using two construction strategies that must stay
//! structurally equivalent, and times them against each other.
//!
//! ## Core Pieces
//!
//! 1. **Child rule**: `left = 3 - v`, `right = 2 * v`, optionally memoized
//! 2. **Level builders**: recursive and iterative expansion, level by level
//! 3. **Benchmark harness**: min-of-R-trials wall-clock comparison
//! 4. **Report sink**: CSV export and console tables for the samples
//!
//! ## Usage Example
//!
//! ```
//! use branchmark::{build_tree, ArithmeticRule, Strategy};
//!
//! let mut rule = ArithmeticRule;
//! let tree = build_tree(14, 2, Strategy::Recursive, &mut rule).unwrap();
//! assert_eq!(tree.levels(), &[vec![14], vec![-11, 28]]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one stage of the pipeline
pub mod bench; // Timing harness (min of repeated trials)
pub mod report; // CSV and console rendering of samples
pub mod rule; // Child value rules, plain and memoized
pub mod tree; // Level-ordered tree and the two builders

// Re-exports for convenience
pub use bench::{benchmark, BenchOptions, Contender, Sample};
pub use rule::{ArithmeticRule, ChildRule, CountingRule, MemoRule};
pub use tree::{Level, Strategy, Tree};

use thiserror::Error;

/// Errors produced by tree construction and the benchmark harness
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Height below 1 - a tree always has at least its root level
    #[error("invalid height {0}: a tree has at least one level")]
    InvalidHeight(i32),

    /// Trial count below 1 - the minimum of zero trials is undefined
    #[error("invalid repeat count {0}: at least one trial is required")]
    InvalidRepeat(u32),

    /// Inner iteration count below 1 - a trial must build at least once
    #[error("invalid iteration count {0}: each trial must build at least once")]
    InvalidNumber(u32),

    /// The benchmark was handed nothing to measure
    #[error("no heights given: the benchmark needs at least one configuration")]
    EmptyHeights,
}

/// Build the full tree for `root` with `height` levels.
///
/// Both strategies produce identical trees for identical inputs; which one
/// runs is the variable the rest of the crate exists to measure. The rule is
/// taken `&mut` so memoized variants can fill their caches while building.
///
/// Fails with [`TreeError::InvalidHeight`] when `height < 1`.
pub fn build_tree<R>(
    root: i64,
    height: i32,
    strategy: Strategy,
    rule: &mut R,
) -> Result<Tree, TreeError>
where
    R: ChildRule + ?Sized,
{
    if height < 1 {
        return Err(TreeError::InvalidHeight(height));
    }

    let levels = match strategy {
        Strategy::Recursive => tree::builder::recursive(root, height as usize, rule),
        Strategy::Iterative => tree::builder::iterative(root, height as usize, rule),
    };

    Ok(Tree::from_levels(levels))
}

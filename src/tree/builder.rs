//! The two expansion strategies
//!
//! Both grow the accumulator one full level at a time: every value in the
//! current deepest level contributes its left child then its right child, in
//! order. Callers validate the height; these functions assume `height >= 1`.

use super::Level;
use crate::rule::ChildRule;

/// Expand one level into the next, preserving sibling order.
fn expand<R: ChildRule + ?Sized>(current: &[i64], rule: &mut R) -> Level {
    let mut next = Vec::with_capacity(current.len() * 2);
    for &value in current {
        next.push(rule.left(value));
        next.push(rule.right(value));
    }
    next
}

/// Call-stack driven construction: one frame per level below the root.
pub(crate) fn recursive<R: ChildRule + ?Sized>(
    root: i64,
    height: usize,
    rule: &mut R,
) -> Vec<Level> {
    let mut levels = vec![vec![root]];
    descend(0, height, rule, &mut levels);
    levels
}

fn descend<R: ChildRule + ?Sized>(
    depth: usize,
    height: usize,
    rule: &mut R,
    levels: &mut Vec<Level>,
) {
    // Base case: the accumulator already holds the deepest level.
    if depth == height - 1 {
        return;
    }

    let next = expand(&levels[depth], rule);
    levels.push(next);
    descend(depth + 1, height, rule, levels);
}

/// Loop driven construction: same expansion, current level as loop state.
pub(crate) fn iterative<R: ChildRule + ?Sized>(
    root: i64,
    height: usize,
    rule: &mut R,
) -> Vec<Level> {
    let mut levels = vec![vec![root]];
    for depth in 1..height {
        let next = expand(&levels[depth - 1], rule);
        levels.push(next);
    }
    levels
}

//! Shared helpers for the integration tests

#![allow(dead_code)]

use branchmark::{build_tree, ArithmeticRule, Strategy, Tree};

/// Build the same tree with both strategies, each from a fresh plain rule.
pub fn build_both(root: i64, height: i32) -> (Tree, Tree) {
    let mut rule = ArithmeticRule;
    let recursive = build_tree(root, height, Strategy::Recursive, &mut rule)
        .expect("valid height should build");

    let mut rule = ArithmeticRule;
    let iterative = build_tree(root, height, Strategy::Iterative, &mut rule)
        .expect("valid height should build");

    (recursive, iterative)
}

/// Heights exercised by the directed tests, smallest first.
pub fn heights_under_test() -> Vec<i32> {
    vec![1, 2, 3, 4, 7, 10]
}

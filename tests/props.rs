//! Property tests over roots and heights

use branchmark::{build_tree, ArithmeticRule, MemoRule, Strategy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn strategies_agree(root in -1_000_000i64..=1_000_000, height in 1i32..12) {
        let mut rule = ArithmeticRule;
        let recursive = build_tree(root, height, Strategy::Recursive, &mut rule).unwrap();

        let mut rule = ArithmeticRule;
        let iterative = build_tree(root, height, Strategy::Iterative, &mut rule).unwrap();

        prop_assert_eq!(recursive, iterative);
    }

    #[test]
    fn levels_double_and_height_matches(root in any::<i32>(), height in 1i32..10) {
        let mut rule = ArithmeticRule;
        let tree = build_tree(i64::from(root), height, Strategy::Iterative, &mut rule).unwrap();

        prop_assert_eq!(tree.height(), height as usize);
        let levels = tree.levels();
        for depth in 1..levels.len() {
            prop_assert_eq!(levels[depth].len(), 2 * levels[depth - 1].len());
        }
    }

    #[test]
    fn memoization_is_transparent(root in -10_000i64..=10_000, height in 1i32..12) {
        let mut plain = ArithmeticRule;
        let expected = build_tree(root, height, Strategy::Recursive, &mut plain).unwrap();

        let mut memoized = MemoRule::new(ArithmeticRule);
        let actual = build_tree(root, height, Strategy::Recursive, &mut memoized).unwrap();

        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn invalid_heights_always_rejected(root in any::<i64>(), height in -1_000i32..1) {
        let mut rule = ArithmeticRule;
        prop_assert!(build_tree(root, height, Strategy::Recursive, &mut rule).is_err());
    }
}

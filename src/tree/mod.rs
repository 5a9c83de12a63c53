//! Level-ordered tree representation
//!
//! The tree is kept as a sequence of levels rather than linked nodes:
//! `levels[0]` is the root level, `levels[i + 1]` holds the children of
//! `levels[i]` in sibling order. Nothing is pruned, so every level is exactly
//! twice as long as the one above it.

pub(crate) mod builder;

use std::fmt;

/// Node values at one depth, in left-to-right sibling order.
pub type Level = Vec<i64>;

/// Which control flow drives the level expansion.
///
/// Both strategies run the same expansion logic; the recursive one keeps it
/// on the call stack (depth equals tree height), the iterative one in a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Strategy {
    /// One call frame per level
    Recursive,
    /// One loop iteration per level
    Iterative,
}

impl Strategy {
    /// Short name used in labels and log output.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        }
    }

    /// The strategy this one is compared against.
    pub fn counterpart(&self) -> Strategy {
        match self {
            Strategy::Recursive => Strategy::Iterative,
            Strategy::Iterative => Strategy::Recursive,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully expanded tree as an ordered list of levels
///
/// Rebuilt from scratch on every benchmark invocation; only child
/// computations are ever cached, never the structure itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Tree {
    levels: Vec<Level>,
}

impl Tree {
    pub(crate) fn from_levels(levels: Vec<Level>) -> Self {
        debug_assert!(!levels.is_empty(), "a tree has at least its root level");
        Self { levels }
    }

    /// Number of levels, root included.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// All levels, shallowest first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The level at `depth` (0 = root), if the tree is that tall.
    pub fn level(&self, depth: usize) -> Option<&Level> {
        self.levels.get(depth)
    }

    /// Total node count across all levels: 2^height - 1 for a full tree.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Consume the tree, yielding the raw level vectors.
    pub fn into_levels(self) -> Vec<Level> {
        self.levels
    }
}

impl fmt::Display for Tree {
    /// One line per level, numbered from 1 at the root.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, level) in self.levels.iter().enumerate() {
            writeln!(f, "Level {}: {:?}", depth + 1, level)?;
        }
        Ok(())
    }
}

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Pattern generation: every line consistent with one clue.
//!
//! A pattern is a fully specified line whose filled blocks, read left to
//! right, are exactly the clue. Generation places blocks recursively: the
//! current block may start anywhere between the cursor and the last position
//! that still leaves room for the remaining blocks plus one separator each.
//! The enumeration is deterministic (leftmost placements first), emits no
//! duplicates, and yields the single all-zero line for the empty clue. A
//! clue that cannot fit the line yields nothing at all.

use crate::nonogram::clue::Clue;
use bit_vec::BitVec;
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// One fully specified line.
pub type Pattern = BitVec;

/// Generates all patterns of `length` matching `clue`.
#[must_use]
pub fn generate(length: usize, clue: &Clue) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    let mut prefix = BitVec::with_capacity(length);
    place(clue.blocks(), length, &mut prefix, &mut patterns);
    patterns
}

/// Places the remaining `blocks` onto `prefix`, emitting completed lines.
fn place(blocks: &[usize], length: usize, prefix: &mut BitVec, out: &mut Vec<Pattern>) {
    let Some((&block, rest)) = blocks.split_first() else {
        let mut pattern = prefix.clone();
        pattern.grow(length - pattern.len(), false);
        out.push(pattern);
        return;
    };

    // Space the remaining blocks need after this one: their lengths plus a
    // mandatory separator in front of each.
    let after: usize = rest.iter().sum::<usize>() + rest.len();
    let cursor = prefix.len();
    if cursor + block + after > length {
        return;
    }
    let max_start = length - block - after;

    for start in cursor..=max_start {
        let saved = prefix.len();
        prefix.grow(start - cursor, false);
        prefix.grow(block, true);
        if !rest.is_empty() {
            prefix.push(false);
        }
        place(rest, length, prefix, out);
        prefix.truncate(saved);
    }
}

/// Memoises generated pattern sets by `(length, clue)`.
///
/// Row and column clues repeat across real puzzles; sharing the sets also
/// hands out `Rc`s, which is what the propagator's candidate collections
/// hold anyway.
#[derive(Clone, Debug, Default)]
pub struct PatternCache {
    sets: FxHashMap<(usize, Clue), Rc<Vec<Pattern>>>,
}

impl PatternCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern set for `clue` on a line of `length`, generating it on
    /// first request.
    pub fn patterns(&mut self, length: usize, clue: &Clue) -> Rc<Vec<Pattern>> {
        if let Some(set) = self.sets.get(&(length, clue.clone())) {
            return Rc::clone(set);
        }
        let set = Rc::new(generate(length, clue));
        self.sets.insert((length, clue.clone()), Rc::clone(&set));
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonogram::clue::blocks_of;

    #[test]
    fn test_empty_clue_yields_single_blank_pattern() {
        let patterns = generate(4, &Clue::empty());
        assert_eq!(patterns, vec![BitVec::from_elem(4, false)]);
    }

    #[test]
    fn test_full_line_block() {
        let patterns = generate(3, &Clue::from(vec![3]));
        assert_eq!(patterns, vec![BitVec::from_elem(3, true)]);
    }

    #[test]
    fn test_single_block_positions() {
        let patterns = generate(4, &Clue::from(vec![2]));
        assert_eq!(patterns.len(), 3);
        // Leftmost placement first.
        assert_eq!(blocks_of(patterns[0].iter()).as_slice(), &[2]);
        assert!(patterns[0][0] && patterns[0][1]);
        assert!(patterns[2][2] && patterns[2][3]);
    }

    #[test]
    fn test_two_blocks() {
        // [1, 1] on length 4: 1.1., 1..1, .1.1
        let patterns = generate(4, &Clue::from(vec![1, 1]));
        assert_eq!(patterns.len(), 3);
        for p in &patterns {
            assert_eq!(p.len(), 4);
            assert_eq!(blocks_of(p.iter()).as_slice(), &[1, 1]);
        }
    }

    #[test]
    fn test_round_trip_decomposition() {
        let clue = Clue::from(vec![2, 1, 3]);
        let patterns = generate(10, &clue);
        assert!(!patterns.is_empty());
        for p in &patterns {
            assert_eq!(p.len(), 10);
            assert!(clue.matches(p));
        }
    }

    #[test]
    fn test_no_duplicates() {
        let patterns = generate(8, &Clue::from(vec![1, 2]));
        let mut seen = patterns.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), patterns.len());
    }

    #[test]
    fn test_infeasible_clue_yields_nothing() {
        assert!(generate(1, &Clue::from(vec![2])).is_empty());
        assert!(generate(4, &Clue::from(vec![2, 2])).is_empty());
    }

    #[test]
    fn test_exact_fit_with_separator() {
        // [2, 2] needs exactly 5 cells: ##.##
        let patterns = generate(5, &Clue::from(vec![2, 2]));
        assert_eq!(patterns.len(), 1);
        let expected: BitVec = [true, true, false, true, true].iter().copied().collect();
        assert_eq!(patterns[0], expected);
    }

    #[test]
    fn test_cache_shares_sets() {
        let mut cache = PatternCache::new();
        let a = cache.patterns(5, &Clue::from(vec![2]));
        let b = cache.patterns(5, &Clue::from(vec![2]));
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 4);
    }
}

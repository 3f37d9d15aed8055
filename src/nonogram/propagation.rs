#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Arc-consistency propagation over per-line candidate sets.
//!
//! Each line owns the subset of its patterns still consistent with the known
//! cells on that line. One pass filters every row's candidates against the
//! grid and writes back any position where all survivors agree, then does
//! the symmetric pass over columns. Passes repeat until a full double pass
//! neither assigns a cell nor shrinks a set. An emptied candidate set proves
//! the current partial assignment infeasible.
//!
//! Candidate sets are shared `Rc`s so a search branch can clone the whole
//! collection by copying R+C pointers; a set is replaced with a freshly
//! allocated vector only when filtering actually prunes it.

use crate::nonogram::cell::Cell;
use crate::nonogram::grid::Grid;
use crate::nonogram::pattern::Pattern;
use std::rc::Rc;

/// A line's surviving patterns.
pub type Candidates = Rc<Vec<Pattern>>;

/// Candidate sets for every row and column of one search branch.
///
/// Cloning is cheap: only the `Rc` pointers are copied. Mutation goes
/// through [`LineCandidates::restrict`] or the propagator, both of which
/// allocate a new set for the affected line.
#[derive(Clone, Debug)]
pub struct LineCandidates {
    pub rows: Vec<Candidates>,
    pub cols: Vec<Candidates>,
}

/// Axis of a line within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Col,
}

impl LineCandidates {
    /// Keeps only the patterns of one line that have `filled` at `pos`.
    ///
    /// Returns `false` if the restriction empties the set, leaving the set
    /// untouched in that case (the caller abandons the branch anyway).
    pub fn restrict(&mut self, kind: LineKind, line: usize, pos: usize, filled: bool) -> bool {
        let set = match kind {
            LineKind::Row => &mut self.rows[line],
            LineKind::Col => &mut self.cols[line],
        };
        let surviving: Vec<Pattern> = set
            .iter()
            .filter(|p| p[pos] == filled)
            .cloned()
            .collect();
        if surviving.is_empty() {
            return false;
        }
        if surviving.len() != set.len() {
            *set = Rc::new(surviving);
        }
        true
    }
}

/// Outcome of running the propagator to quiescence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Grid and candidate sets are mutually consistent; every direct
    /// inference has been applied.
    FixedPoint,
    /// Some line's candidate set emptied: the partial assignment cannot be
    /// extended to a solution.
    Contradiction,
}

/// Runs row and column passes until a fixed point or a contradiction.
pub fn propagate(grid: &mut Grid, candidates: &mut LineCandidates) -> Propagation {
    loop {
        let mut changed = false;

        for row in 0..grid.rows() {
            let cells = grid.row(row);
            let Some(forced) = sweep(&cells, &mut candidates.rows[row], &mut changed) else {
                return Propagation::Contradiction;
            };
            for (col, cell) in forced.into_iter().enumerate() {
                if cell.is_known() && !grid.get(row, col).is_known() {
                    grid.set(row, col, cell);
                    changed = true;
                }
            }
        }

        for col in 0..grid.cols() {
            let cells = grid.col(col);
            let Some(forced) = sweep(&cells, &mut candidates.cols[col], &mut changed) else {
                return Propagation::Contradiction;
            };
            for (row, cell) in forced.into_iter().enumerate() {
                if cell.is_known() && !grid.get(row, col).is_known() {
                    grid.set(row, col, cell);
                    changed = true;
                }
            }
        }

        if !changed {
            return Propagation::FixedPoint;
        }
    }
}

/// Filters one line's candidates against its known cells and tallies the
/// survivors.
///
/// Returns `None` when no candidate survives. Otherwise returns, per
/// position, the forced cell value: `Filled` when every survivor has a one
/// there, `Empty` when none does, `Unknown` when they disagree. The tally is
/// a per-position count of ones gathered in a single scan of the set.
fn sweep(cells: &[Cell], set: &mut Candidates, changed: &mut bool) -> Option<Vec<Cell>> {
    let surviving: Vec<&Pattern> = set
        .iter()
        .filter(|p| cells.iter().enumerate().all(|(i, c)| c.agrees_with(p[i])))
        .collect();

    if surviving.is_empty() {
        return None;
    }

    let mut ones = vec![0_usize; cells.len()];
    for pattern in &surviving {
        for (i, count) in ones.iter_mut().enumerate() {
            if pattern[i] {
                *count += 1;
            }
        }
    }

    let total = surviving.len();
    if total != set.len() {
        *set = Rc::new(surviving.into_iter().cloned().collect());
        *changed = true;
    }

    Some(
        ones.into_iter()
            .map(|count| {
                if count == total {
                    Cell::Filled
                } else if count == 0 {
                    Cell::Empty
                } else {
                    Cell::Unknown
                }
            })
            .collect(),
    )
}

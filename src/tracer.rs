//! Single-pass boundary tracer
//!
//! One row-major sweep over every lattice corner of the padded extent. Each
//! corner classifies against its four neighboring cells and the resulting
//! case threads zero, one, or two nodes into the chains under construction.
//!
//! The scan state is two frontiers: `top[column]` holds the most recent node
//! created in that column of the row above, still waiting for its downward
//! link; `left` holds the most recent node created earlier in the current
//! row, waiting for its forward link. Each corner's case reads both slots as
//! they stood before the corner and installs their replacements.

use tracing::debug;

use crate::chain::{ChainArena, NodeId};
use crate::corner::{corner_code, CornerCase, Slot, CASES};
use crate::grid::OccupancyGrid;

/// Output of the scan pass: the node arena plus the ring-start candidates in
/// scan order.
#[derive(Debug)]
pub struct TracedChains {
    pub arena: ChainArena,
    pub starts: Vec<NodeId>,
}

/// Mutable scan state threaded through the corner sweep.
struct Frontier {
    top: Vec<Option<NodeId>>,
    left: Option<NodeId>,
}

impl Frontier {
    fn new(columns: usize) -> Self {
        Self {
            top: vec![None; columns],
            left: None,
        }
    }

    /// Run one corner's case against the arena.
    ///
    /// Both actions of a saddle read the same pre-corner slot values; slot
    /// updates combine afterwards, and a slot no action claims is cleared.
    fn apply(
        &mut self,
        case: &CornerCase,
        column: usize,
        x: i32,
        y: i32,
        arena: &mut ChainArena,
        starts: &mut Vec<NodeId>,
    ) {
        let prev_top = self.top[column];
        let prev_left = self.left;
        let mut next_top = None;
        let mut next_left = None;

        for action in case.actions() {
            let node = arena.alloc(x, y);

            match action.takes {
                Some(Slot::Top) => arena.set_next(node, prev_top),
                Some(Slot::Left) => arena.set_next(node, prev_left),
                None => {}
            }
            match action.links {
                Some(Slot::Top) => {
                    if let Some(top) = prev_top {
                        arena.set_next(top, Some(node));
                    }
                }
                Some(Slot::Left) => {
                    if let Some(left) = prev_left {
                        arena.set_next(left, Some(node));
                    }
                }
                None => {}
            }

            if action.becomes_top {
                next_top = Some(node);
            }
            if action.becomes_left {
                next_left = Some(node);
            }
            if action.starts_loop {
                starts.push(node);
            }
        }

        self.top[column] = next_top;
        self.left = next_left;
    }
}

/// Sweep every corner of `grid`'s padded extent and thread boundary chains.
///
/// Corners run from `(-buffer, -buffer)` to
/// `(resolution + buffer, resolution + buffer)` inclusive, one more per
/// axis than there are cells, since corners sit between cells. The pass is
/// read-only on the grid and costs `O(side²)` regardless of how much
/// foreground it contains.
///
/// The `left` frontier carries over row boundaries. For any mask whose
/// foreground stays inside the padded extent it is always empty at a row's
/// end; when foreground touches the extent's rim the leftover slot produces
/// an unclosed chain, which extraction discards.
pub fn trace_chains(grid: &OccupancyGrid) -> TracedChains {
    let resolution = grid.resolution();
    let buffer = grid.buffer();

    let mut arena = ChainArena::new();
    let mut starts = Vec::new();
    // One column slot per corner x, i.e. side + 1 of them.
    let mut frontier = Frontier::new(grid.side() as usize + 1);

    for y in -buffer..=resolution + buffer {
        for x in -buffer..=resolution + buffer {
            let case = &CASES[corner_code(grid, x, y) as usize];
            if matches!(case, CornerCase::Pass) {
                continue;
            }
            let column = (x + buffer) as usize;
            frontier.apply(case, column, x, y, &mut arena, &mut starts);
        }
    }

    debug!(
        nodes = arena.len(),
        starts = starts.len(),
        side = grid.side(),
        "traced boundary chains"
    );

    TracedChains { arena, starts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_produces_no_chains() {
        let grid = OccupancyGrid::new(8, 1);
        let chains = trace_chains(&grid);
        assert!(chains.arena.is_empty());
        assert!(chains.starts.is_empty());
    }

    #[test]
    fn test_single_cell_produces_one_closed_chain() {
        let mut grid = OccupancyGrid::new(8, 1);
        let offset = grid.point_offset(3, 3).unwrap();
        grid.set(offset, true);

        let chains = trace_chains(&grid);
        assert_eq!(chains.arena.len(), 4);
        assert_eq!(chains.starts.len(), 1);

        // The chain from the start candidate walks all four corners and
        // returns to the start.
        let start = chains.starts[0];
        let mut seen = Vec::new();
        let mut cur = start;
        loop {
            let node = chains.arena.node(cur);
            seen.push((node.x, node.y));
            cur = node.next.expect("chain must be closed");
            if cur == start {
                break;
            }
        }
        assert_eq!(seen, vec![(3, 3), (4, 3), (4, 4), (3, 4)]);
    }

    #[test]
    fn test_saddle_creates_two_nodes_at_one_corner() {
        // Cells (2, 2) and (3, 3): corner (3, 3) is the code-9 saddle.
        let mut grid = OccupancyGrid::new(8, 1);
        let a = grid.point_offset(2, 2).unwrap();
        let b = grid.point_offset(3, 3).unwrap();
        grid.set(a, true);
        grid.set(b, true);

        let chains = trace_chains(&grid);
        // Two 4-corner loops; the saddle corner is counted once per loop.
        assert_eq!(chains.arena.len(), 8);
        assert_eq!(chains.starts.len(), 2);
    }

    #[test]
    fn test_trace_is_read_only() {
        let mut grid = OccupancyGrid::new(8, 1);
        grid.fill_rect(1, 4, 1, 4);
        let before = grid.occupied_cells();
        let _ = trace_chains(&grid);
        assert_eq!(grid.occupied_cells(), before);
    }
}

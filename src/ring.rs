//! Ring extraction
//!
//! Walks the chains produced by the tracer, keeps the ones that close back
//! on their starting corner, and serializes each into an ordered coordinate
//! sequence with an explicit closing repeat of the first point. The chain
//! arena is consumed; all intermediate nodes are gone when this returns.

use std::fmt;

use tracing::{debug, warn};

use crate::tracer::TracedChains;

/// One closed boundary loop.
///
/// Coordinates are in traversal order as produced by the case table
/// (clockwise in y-down raster orientation for outer boundaries), and the
/// last point repeats the first. Rings emitted by the tracer always have at
/// least four distinct corners before the closing repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    points: Vec<(i16, i16)>,
}

impl Ring {
    /// The ordered coordinate sequence, closing repeat included.
    pub fn points(&self) -> &[(i16, i16)] {
        &self.points
    }

    /// Number of coordinate pairs, closing repeat included.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, y) in &self.points {
            write!(f, "({x},{y}) ")?;
        }
        Ok(())
    }
}

/// Convert traced chains into rings, consuming the chain storage.
///
/// Each ring-start candidate is walked once to verify closure and count
/// nodes, then a second time to copy coordinates and mark every node
/// reported, so a corner node lands in at most one ring. A walk that runs
/// into a missing link is an unclosed chain: no ring is emitted for it.
/// Unclosed chains only arise when foreground touches the rim of the padded
/// extent; the number dropped is logged as a warning.
pub fn extract_rings(chains: TracedChains) -> Vec<Ring> {
    let TracedChains { mut arena, starts } = chains;

    let mut rings = Vec::new();
    let mut discarded = 0usize;

    for &start in &starts {
        if arena.node(start).reported {
            continue;
        }

        // First walk: count nodes and check that the chain closes.
        let mut count = 0usize;
        let mut cur = start;
        let closed = loop {
            count += 1;
            match arena.node(cur).next {
                None => break false,
                Some(next) if next == start => break true,
                Some(next) => cur = next,
            }
        };
        if !closed {
            discarded += 1;
            continue;
        }

        // Second walk: serialize and mark.
        let mut points = Vec::with_capacity(count + 1);
        let mut cur = start;
        for _ in 0..count {
            let node = arena.node(cur);
            points.push((node.x as i16, node.y as i16));
            let next = node.next;
            arena.mark_reported(cur);
            cur = next.unwrap_or(start);
        }
        let first = arena.node(start);
        points.push((first.x as i16, first.y as i16));

        rings.push(Ring { points });
    }

    if discarded > 0 {
        warn!(discarded, "discarded unclosed boundary chains");
    }
    debug!(rings = rings.len(), nodes = arena.len(), "extracted rings");

    rings
}

//! Continuous-to-lattice coordinate mapping
//!
//! Callers paint the occupancy grid in lattice coordinates. When the source
//! data is continuous, a [`LatticeTransform`] maps it onto the lattice before
//! any cell is marked; the tracing algorithm itself never sees continuous
//! coordinates.

/// Maps a continuous coordinate pair onto integer lattice coordinates.
///
/// Implementations must be pure: the same input always maps to the same
/// lattice point. `Send + Sync` is required so masks holding a transform can
/// be traced from parallel workers.
pub trait LatticeTransform: Send + Sync {
    /// Map `(x, y)` to the lattice point it lands on.
    fn map_to_lattice(&self, x: f64, y: f64) -> (i32, i32);
}

/// The default transform: round each coordinate to the nearest integer,
/// halves away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestLattice;

impl LatticeTransform for NearestLattice {
    #[inline]
    fn map_to_lattice(&self, x: f64, y: f64) -> (i32, i32) {
        (x.round() as i32, y.round() as i32)
    }
}

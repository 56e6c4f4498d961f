//! Conservation-element accessors.

use cese_grid::Parity;

use crate::field::Field;
use crate::selm::Selm;

/// A conservation element: the diamond-shaped space-time control volume
/// spanning two adjacent solution elements across one half time-step.
///
/// Like [`Selm`], a `Celm` is a transient accessor keyed by raw storage
/// index. Its four bounding solution elements are *never stored*: each
/// accessor recomputes the neighbor's raw index from this element's own
/// logical index and parity, so a neighbor reference can never go stale.
/// The cost is O(1) integer arithmetic per access.
///
/// # Neighbor layout
///
/// For a celm with logical index `i` on plane `p` (`o = 1` on the odd
/// plane, else 0):
///
/// ```text
/// selm_xn = selm(i,     p)    one half-slot in negative x, old plane
/// selm_xp = selm(i + 1, p)    one half-slot in positive x, old plane
/// selm_tn = selm(i + o, !p)   the celm's own position, other plane
/// selm_tp = selm(i + o, !p)   same slot as tn
/// ```
///
/// `tn` and `tp` resolve to the same storage slot: within one half-step
/// it is read as the backward-time tip and then overwritten as the
/// forward-time tip, since only two half-time planes are ever live.
///
/// Every derived neighbor index must land inside the grid's padded range;
/// a violation is a boundary-handling bug in the surrounding driver and
/// is only debug-asserted here.
#[derive(Clone, Copy)]
pub struct Celm<'a> {
    field: &'a Field,
    xindex: usize,
}

impl<'a> Celm<'a> {
    pub(crate) fn new(field: &'a Field, xindex: usize) -> Self {
        Self { field, xindex }
    }

    /// Raw storage index.
    pub fn xindex(&self) -> usize {
        self.xindex
    }

    /// Logical celm index recovered from the raw index.
    pub fn index(&self) -> isize {
        self.field.grid().celm_position(self.xindex).0
    }

    /// Plane parity recovered from the raw index.
    pub fn parity(&self) -> Parity {
        self.field.grid().celm_position(self.xindex).1
    }

    /// True if this element sits on the even plane.
    pub fn on_even_plane(&self) -> bool {
        self.parity().is_even()
    }

    /// True if this element sits on the odd plane.
    pub fn on_odd_plane(&self) -> bool {
        self.parity().is_odd()
    }

    /// Coordinate of the element center.
    pub fn x(&self) -> f64 {
        self.field.grid().xcoord(self.xindex)
    }

    /// The element center (alias of [`x`](Self::x)).
    pub fn xctr(&self) -> f64 {
        self.x()
    }

    /// Spatial span of the diamond, from the negative to the positive
    /// bounding solution element.
    pub fn dx(&self) -> f64 {
        let grid = self.field.grid();
        grid.xcoord(self.xindex + 1) - grid.xcoord(self.xindex - 1)
    }

    /// Full time increment of the owning field.
    pub fn dt(&self) -> f64 {
        self.field.dt()
    }

    /// Half time increment of the owning field.
    pub fn hdt(&self) -> f64 {
        self.field.hdt()
    }

    /// Quarter time increment of the owning field.
    pub fn qdt(&self) -> f64 {
        self.field.qdt()
    }

    /// Bounding solution element in negative x, on this celm's plane.
    pub fn selm_xn(&self) -> Selm<'a> {
        self.field.selm(self.index(), self.parity())
    }

    /// Bounding solution element in positive x, on this celm's plane.
    pub fn selm_xp(&self) -> Selm<'a> {
        self.field.selm(self.index() + 1, self.parity())
    }

    /// Bounding solution element backward in time, on the other plane.
    pub fn selm_tn(&self) -> Selm<'a> {
        let offset = self.parity().offset() as isize;
        self.field.selm(self.index() + offset, !self.parity())
    }

    /// Bounding solution element forward in time; shares `selm_tn`'s slot.
    pub fn selm_tp(&self) -> Selm<'a> {
        self.selm_tn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cese_grid::Grid;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn field() -> Field {
        let grid = Arc::new(Grid::uniform(0.0, 8.0, 8, 2).unwrap());
        Field::new(grid, 1, 0.5).unwrap()
    }

    #[test]
    fn index_and_parity_round_trip() {
        let field = field();
        for parity in [Parity::Even, Parity::Odd] {
            for icelm in field.grid().celm_indices(parity) {
                let ce = field.celm(icelm, parity);
                assert_eq!(ce.index(), icelm);
                assert_eq!(ce.parity(), parity);
            }
        }
    }

    #[test]
    fn even_plane_neighbors() {
        let field = field();
        let ce = field.celm(3, Parity::Even);
        assert_eq!(ce.xindex(), 9);
        assert_eq!(ce.selm_xn().xindex(), 8);
        assert_eq!(ce.selm_xp().xindex(), 10);
        // Temporal neighbors share the celm's own raw position.
        assert_eq!(ce.selm_tn().xindex(), 9);
        assert_eq!(ce.selm_tp().xindex(), 9);
        assert!(ce.selm_xn().on_even_plane());
        assert!(ce.selm_tn().on_odd_plane());
    }

    #[test]
    fn odd_plane_neighbors() {
        let field = field();
        let ce = field.celm(3, Parity::Odd);
        assert_eq!(ce.xindex(), 10);
        assert_eq!(ce.selm_xn().xindex(), 9);
        assert_eq!(ce.selm_xp().xindex(), 11);
        assert_eq!(ce.selm_tn().xindex(), 10);
        assert!(ce.selm_xn().on_odd_plane());
        assert!(ce.selm_tn().on_even_plane());
    }

    #[test]
    fn geometry_on_uniform_grid() {
        let field = field();
        let ce = field.celm(2, Parity::Even);
        assert_eq!(ce.x(), 2.5);
        assert_eq!(ce.xctr(), 2.5);
        assert_eq!(ce.dx(), 1.0);
        assert_eq!(ce.selm_xn().x(), 2.0);
        assert_eq!(ce.selm_xp().x(), 3.0);
        assert_eq!(ce.selm_tp().x(), 2.5);
    }

    #[test]
    fn neighbors_read_current_storage() {
        // The handle holds indices, never data; reads always hit the
        // field's current slot contents.
        let mut field = field();
        field.selm_mut(2, Parity::Even).set_so0(0, 1.0);
        let ce = field.celm(2, Parity::Even);
        assert_eq!(ce.selm_xn().so0(0), 1.0);
    }

    proptest! {
        /// The diamond geometry holds on every interior celm of every
        /// plane, whatever the grid size and ghost padding: the spatial
        /// neighbors bracket the center, the temporal neighbor shares
        /// the celm's own slot, and the spans agree.
        #[test]
        fn diamond_geometry_over_random_grids(
            ncelm in 2usize..48,
            bound_count in (0usize..6).prop_map(|b| b * 2),
        ) {
            let grid = Arc::new(Grid::uniform(-2.0, 3.0, ncelm, bound_count).unwrap());
            let field = Field::new(grid, 1, 0.25).unwrap();
            for parity in [Parity::Even, Parity::Odd] {
                for icelm in field.grid().celm_indices(parity) {
                    let ce = field.celm(icelm, parity);
                    let xn = ce.selm_xn();
                    let xp = ce.selm_xp();
                    let tp = ce.selm_tp();
                    prop_assert!(xn.x() < ce.x() && ce.x() < xp.x());
                    prop_assert_eq!(tp.x(), ce.x());
                    prop_assert_eq!(tp.dx(), ce.dx());
                    prop_assert_eq!(xn.parity(), parity);
                    prop_assert_eq!(xp.parity(), parity);
                    prop_assert_eq!(tp.parity(), !parity);
                    prop_assert!((xn.dxpos() + xp.dxneg() - ce.dx()).abs() < 1e-12);
                }
            }
        }
    }
}

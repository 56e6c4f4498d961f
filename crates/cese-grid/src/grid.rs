//! The staggered space-time grid.

use crate::error::GridError;
use crate::parity::Parity;

/// Immutable coordinate table and index algebra for a 1D staggered mesh.
///
/// The table interleaves node coordinates (even-plane solution-element
/// positions) with half-node coordinates (odd-plane positions), padded by
/// `bound_count` ghost slots at each end for the external boundary layer.
/// Conservation and solution elements are addressed by a *raw* storage
/// index into this table; the logical element index and the plane parity
/// are pure functions of the raw index, and vice versa.
///
/// A `Grid` is immutable after construction and is shared by reference
/// (typically `Arc<Grid>`) between the field storage and every element
/// accessor created from it.
///
/// # Ghost-count invariant
///
/// `bound_count` must be even: the inverse index mappings recover the
/// plane parity from the low bit of the raw index, which only lines up
/// when the padding shifts both planes by the same amount. Odd counts are
/// rejected once, at construction; no method re-checks it.
///
/// # Examples
///
/// ```
/// use cese_grid::{Grid, Parity};
///
/// let grid = Grid::uniform(0.0, 10.0, 10, 2).unwrap();
/// assert_eq!(grid.ncelm(), 10);
/// assert_eq!(grid.nselm(), 11);
/// assert_eq!(grid.xsize(), 25);
///
/// // Node 3 of the even plane sits at x = 3.
/// let xi = grid.xindex_selm(3, Parity::Even);
/// assert_eq!(grid.xcoord(xi), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    xmin: f64,
    xmax: f64,
    ncelm: usize,
    bound_count: usize,
    xcoord: Vec<f64>,
}

impl Grid {
    /// Create a uniformly spaced grid with `ncelm` conservation elements
    /// over `[xmin, xmax]` and `bound_count` ghost slots at each end.
    ///
    /// # Errors
    ///
    /// - [`GridError::OddBoundCount`] if `bound_count` is odd
    /// - [`GridError::EmptyGrid`] if `ncelm == 0`
    /// - [`GridError::InvalidDomain`] if the bounds are non-finite or
    ///   `xmin >= xmax`
    pub fn uniform(
        xmin: f64,
        xmax: f64,
        ncelm: usize,
        bound_count: usize,
    ) -> Result<Self, GridError> {
        if bound_count % 2 != 0 {
            return Err(GridError::OddBoundCount { bound_count });
        }
        if ncelm == 0 {
            return Err(GridError::EmptyGrid);
        }
        if !xmin.is_finite() || !xmax.is_finite() || xmin >= xmax {
            return Err(GridError::InvalidDomain { xmin, xmax });
        }

        let hdx = (xmax - xmin) / (2 * ncelm) as f64;
        let xsize = 2 * (ncelm + bound_count) + 1;
        let xcoord = (0..xsize)
            .map(|i| xmin + (i as f64 - bound_count as f64) * hdx)
            .collect();

        Ok(Self {
            xmin,
            xmax,
            ncelm,
            bound_count,
            xcoord,
        })
    }

    /// Create a grid from explicit, strictly increasing node coordinates.
    ///
    /// `nodes` holds the `ncelm + 1` even-plane positions; half-node
    /// coordinates are their midpoints, and ghost coordinates are
    /// extrapolated from the end half-spacings.
    ///
    /// # Errors
    ///
    /// - [`GridError::OddBoundCount`] if `bound_count` is odd
    /// - [`GridError::EmptyGrid`] if fewer than two nodes are given
    /// - [`GridError::NonFiniteCoordinate`] on NaN or infinite nodes
    /// - [`GridError::NonIncreasingCoordinates`] if any node does not
    ///   strictly exceed its predecessor
    pub fn from_coordinates(nodes: &[f64], bound_count: usize) -> Result<Self, GridError> {
        if bound_count % 2 != 0 {
            return Err(GridError::OddBoundCount { bound_count });
        }
        if nodes.len() < 2 {
            return Err(GridError::EmptyGrid);
        }
        for (index, &x) in nodes.iter().enumerate() {
            if !x.is_finite() {
                return Err(GridError::NonFiniteCoordinate { index });
            }
            if index > 0 && x <= nodes[index - 1] {
                return Err(GridError::NonIncreasingCoordinates { index });
            }
        }

        let ncelm = nodes.len() - 1;
        let xsize = 2 * (ncelm + bound_count) + 1;
        let mut xcoord = vec![0.0; xsize];

        for (k, &x) in nodes.iter().enumerate() {
            xcoord[bound_count + 2 * k] = x;
        }
        for k in 0..ncelm {
            xcoord[bound_count + 2 * k + 1] = 0.5 * (nodes[k] + nodes[k + 1]);
        }

        // Ghost slots continue the end half-spacings outward.
        let hneg = 0.5 * (nodes[1] - nodes[0]);
        let hpos = 0.5 * (nodes[ncelm] - nodes[ncelm - 1]);
        let last = bound_count + 2 * ncelm;
        for k in 1..=bound_count {
            xcoord[bound_count - k] = nodes[0] - k as f64 * hneg;
            xcoord[last + k] = nodes[ncelm] + k as f64 * hpos;
        }

        Ok(Self {
            xmin: nodes[0],
            xmax: nodes[ncelm],
            ncelm,
            bound_count,
            xcoord,
        })
    }

    /// Lower domain bound (first interior node).
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper domain bound (last interior node).
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Number of conservation elements on the even plane.
    pub fn ncelm(&self) -> usize {
        self.ncelm
    }

    /// Number of solution elements on the even plane (`ncelm + 1`).
    pub fn nselm(&self) -> usize {
        self.ncelm + 1
    }

    /// Ghost slots reserved at each end for the boundary layer.
    pub fn bound_count(&self) -> usize {
        self.bound_count
    }

    /// Total raw slots in the coordinate table, ghosts included.
    pub fn xsize(&self) -> usize {
        self.xcoord.len()
    }

    /// Interior conservation elements on the given plane.
    ///
    /// The odd plane sits half a cell inward at both ends, so it carries
    /// one element fewer than the even plane.
    pub fn ncelm_on(&self, parity: Parity) -> usize {
        match parity {
            Parity::Even => self.ncelm,
            Parity::Odd => self.ncelm - 1,
        }
    }

    /// Interior solution elements on the given plane.
    pub fn nselm_on(&self, parity: Parity) -> usize {
        match parity {
            Parity::Even => self.ncelm + 1,
            Parity::Odd => self.ncelm,
        }
    }

    /// Logical indices of the interior conservation elements on a plane.
    pub fn celm_indices(&self, parity: Parity) -> std::ops::Range<isize> {
        0..self.ncelm_on(parity) as isize
    }

    /// Logical indices of the interior solution elements on a plane.
    pub fn selm_indices(&self, parity: Parity) -> std::ops::Range<isize> {
        0..self.nselm_on(parity) as isize
    }

    /// Coordinate of a raw storage slot.
    pub fn xcoord(&self, xindex: usize) -> f64 {
        self.xcoord[xindex]
    }

    /// Raw storage index of a solution element.
    ///
    /// Ghost elements carry negative logical indices; the result must
    /// land inside the padded table (debug-asserted, not re-validated on
    /// the hot path).
    pub fn xindex_selm(&self, ielm: isize, parity: Parity) -> usize {
        let xindex = 2 * ielm + self.bound_count as isize + parity.offset() as isize;
        debug_assert!(
            (0..self.xsize() as isize).contains(&xindex),
            "selm ({ielm}, {parity}) outside the padded table"
        );
        xindex as usize
    }

    /// Raw storage index of a conservation element.
    pub fn xindex_celm(&self, icelm: isize, parity: Parity) -> usize {
        let xindex = 2 * icelm + self.bound_count as isize + 1 + parity.offset() as isize;
        debug_assert!(
            (0..self.xsize() as isize).contains(&xindex),
            "celm ({icelm}, {parity}) outside the padded table"
        );
        xindex as usize
    }

    /// Inverse mapping: raw index → (logical selm index, plane parity).
    ///
    /// Ghost slots map to negative logical indices. The parity falls out
    /// of the low bit alone because `bound_count` is even.
    pub fn selm_position(&self, xindex: usize) -> (isize, Parity) {
        let ielm = (xindex as isize - self.bound_count as isize) >> 1;
        (ielm, Parity::from_bit(xindex))
    }

    /// Inverse mapping: raw index → (logical celm index, plane parity).
    ///
    /// With the reference ghost count of 2 this reduces to the classical
    /// `((xindex - 1) >> 1) - 1`.
    pub fn celm_position(&self, xindex: usize) -> (isize, Parity) {
        let icelm = ((xindex as isize - self.bound_count as isize + 1) >> 1) - 1;
        (icelm, Parity::from_bit(xindex + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn uniform_rejects_odd_bound_count() {
        for bc in [1usize, 3, 5, 17] {
            let result = Grid::uniform(0.0, 1.0, 4, bc);
            assert!(
                matches!(result, Err(GridError::OddBoundCount { bound_count }) if bound_count == bc),
                "bound_count {bc} should be rejected"
            );
        }
    }

    #[test]
    fn uniform_accepts_even_bound_counts() {
        for bc in [0usize, 2, 4, 6, 12] {
            let grid = Grid::uniform(0.0, 1.0, 4, bc).unwrap();
            assert_eq!(grid.bound_count(), bc);
            assert_eq!(grid.xsize(), 2 * (4 + bc) + 1);
        }
    }

    #[test]
    fn uniform_rejects_empty_grid() {
        assert_eq!(Grid::uniform(0.0, 1.0, 0, 2), Err(GridError::EmptyGrid));
    }

    #[test]
    fn uniform_rejects_bad_domain() {
        assert!(matches!(
            Grid::uniform(1.0, 0.0, 4, 2),
            Err(GridError::InvalidDomain { .. })
        ));
        assert!(matches!(
            Grid::uniform(0.0, f64::NAN, 4, 2),
            Err(GridError::InvalidDomain { .. })
        ));
        assert!(matches!(
            Grid::uniform(0.0, f64::INFINITY, 4, 2),
            Err(GridError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn uniform_node_coordinates() {
        let grid = Grid::uniform(0.0, 4.0, 4, 2).unwrap();
        for j in 0..5 {
            let xi = grid.xindex_selm(j, Parity::Even);
            assert_eq!(grid.xcoord(xi), j as f64);
        }
        // Half nodes at the midpoints.
        for j in 0..4 {
            let xi = grid.xindex_selm(j, Parity::Odd);
            assert_eq!(grid.xcoord(xi), j as f64 + 0.5);
        }
        // Ghosts continue the spacing outward.
        assert_eq!(grid.xcoord(0), -1.0);
        assert_eq!(grid.xcoord(1), -0.5);
        assert_eq!(grid.xcoord(grid.xsize() - 1), 5.0);
    }

    #[test]
    fn from_coordinates_matches_uniform_on_uniform_input() {
        let nodes: Vec<f64> = (0..=6).map(|k| k as f64 * 0.5).collect();
        let a = Grid::from_coordinates(&nodes, 2).unwrap();
        let b = Grid::uniform(0.0, 3.0, 6, 2).unwrap();
        assert_eq!(a.xsize(), b.xsize());
        for i in 0..a.xsize() {
            assert!(
                (a.xcoord(i) - b.xcoord(i)).abs() < 1e-12,
                "slot {i}: {} vs {}",
                a.xcoord(i),
                b.xcoord(i)
            );
        }
    }

    #[test]
    fn from_coordinates_nonuniform_midpoints() {
        let grid = Grid::from_coordinates(&[0.0, 1.0, 3.0, 7.0], 2).unwrap();
        assert_eq!(grid.ncelm(), 3);
        assert_eq!(grid.xcoord(grid.xindex_selm(0, Parity::Odd)), 0.5);
        assert_eq!(grid.xcoord(grid.xindex_selm(1, Parity::Odd)), 2.0);
        assert_eq!(grid.xcoord(grid.xindex_selm(2, Parity::Odd)), 5.0);
        // Ghosts extrapolate the end half-spacings (0.5 below, 2.0 above).
        assert_eq!(grid.xcoord(1), -0.5);
        assert_eq!(grid.xcoord(0), -1.0);
        let last = grid.xsize() - 1;
        assert_eq!(grid.xcoord(last - 1), 9.0);
        assert_eq!(grid.xcoord(last), 11.0);
    }

    #[test]
    fn from_coordinates_rejects_bad_input() {
        assert!(matches!(
            Grid::from_coordinates(&[0.0, 1.0], 3),
            Err(GridError::OddBoundCount { bound_count: 3 })
        ));
        assert_eq!(Grid::from_coordinates(&[0.0], 2), Err(GridError::EmptyGrid));
        assert_eq!(
            Grid::from_coordinates(&[0.0, 1.0, 1.0], 2),
            Err(GridError::NonIncreasingCoordinates { index: 2 })
        );
        assert_eq!(
            Grid::from_coordinates(&[0.0, f64::NAN, 2.0], 2),
            Err(GridError::NonFiniteCoordinate { index: 1 })
        );
    }

    // ── Counts ──────────────────────────────────────────────────

    #[test]
    fn per_plane_counts() {
        let grid = Grid::uniform(0.0, 1.0, 10, 2).unwrap();
        assert_eq!(grid.ncelm_on(Parity::Even), 10);
        assert_eq!(grid.ncelm_on(Parity::Odd), 9);
        assert_eq!(grid.nselm_on(Parity::Even), 11);
        assert_eq!(grid.nselm_on(Parity::Odd), 10);
        assert_eq!(grid.celm_indices(Parity::Odd).len(), 9);
        assert_eq!(grid.selm_indices(Parity::Even).len(), 11);
    }

    // ── Index algebra ───────────────────────────────────────────

    #[test]
    fn celm_inverse_reduces_to_reference_formula_for_bound_two() {
        let grid = Grid::uniform(0.0, 1.0, 8, 2).unwrap();
        for icelm in grid.celm_indices(Parity::Even) {
            let xi = grid.xindex_celm(icelm, Parity::Even);
            assert_eq!(((xi as isize - 1) >> 1) - 1, icelm);
        }
        for icelm in grid.celm_indices(Parity::Odd) {
            let xi = grid.xindex_celm(icelm, Parity::Odd);
            assert_eq!(((xi as isize - 1) >> 1) - 1, icelm);
        }
    }

    #[test]
    fn celm_neighbors_by_index_arithmetic() {
        // A celm's spatial neighbors sit one raw slot away, its temporal
        // neighbor shares the celm's own raw position on the other plane.
        let grid = Grid::uniform(0.0, 1.0, 8, 4).unwrap();
        for parity in [Parity::Even, Parity::Odd] {
            for icelm in grid.celm_indices(parity) {
                let xi = grid.xindex_celm(icelm, parity);
                assert_eq!(grid.xindex_selm(icelm, parity), xi - 1);
                assert_eq!(grid.xindex_selm(icelm + 1, parity), xi + 1);
                let it = icelm + parity.offset() as isize;
                assert_eq!(grid.xindex_selm(it, !parity), xi);
            }
        }
    }

    #[test]
    fn ghost_positions_are_negative() {
        let grid = Grid::uniform(0.0, 1.0, 4, 2).unwrap();
        let (ielm, parity) = grid.selm_position(0);
        assert_eq!((ielm, parity), (-1, Parity::Even));
        let (ielm, parity) = grid.selm_position(1);
        assert_eq!((ielm, parity), (-1, Parity::Odd));
        let (icelm, parity) = grid.celm_position(1);
        assert_eq!((icelm, parity), (-1, Parity::Even));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn bound_count_parity_decides_construction(
            ncelm in 1usize..64,
            bound_count in 0usize..32,
        ) {
            let result = Grid::uniform(0.0, 1.0, ncelm, bound_count);
            if bound_count % 2 == 0 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(GridError::OddBoundCount { bound_count }));
            }
        }

        #[test]
        fn selm_index_round_trip(
            ncelm in 1usize..64,
            bound_count in (0usize..16).prop_map(|b| b * 2),
        ) {
            let grid = Grid::uniform(0.0, 1.0, ncelm, bound_count).unwrap();
            for parity in [Parity::Even, Parity::Odd] {
                for ielm in grid.selm_indices(parity) {
                    let xi = grid.xindex_selm(ielm, parity);
                    prop_assert_eq!(grid.selm_position(xi), (ielm, parity));
                }
            }
        }

        #[test]
        fn celm_index_round_trip(
            ncelm in 2usize..64,
            bound_count in (0usize..16).prop_map(|b| b * 2),
        ) {
            let grid = Grid::uniform(0.0, 1.0, ncelm, bound_count).unwrap();
            for parity in [Parity::Even, Parity::Odd] {
                for icelm in grid.celm_indices(parity) {
                    let xi = grid.xindex_celm(icelm, parity);
                    prop_assert_eq!(grid.celm_position(xi), (icelm, parity));
                }
            }
        }

        #[test]
        fn coordinates_strictly_increase(
            ncelm in 1usize..64,
            bound_count in (0usize..8).prop_map(|b| b * 2),
        ) {
            let grid = Grid::uniform(-3.0, 5.0, ncelm, bound_count).unwrap();
            for i in 1..grid.xsize() {
                prop_assert!(grid.xcoord(i) > grid.xcoord(i - 1));
            }
        }
    }
}

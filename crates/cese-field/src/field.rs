//! The [`Field`]: flat solution storage over both half-time planes.

use std::sync::Arc;

use cese_grid::{Grid, Parity};

use crate::celm::Celm;
use crate::error::FieldError;
use crate::selm::{Selm, SelmMut};

/// Solution storage for one staggered grid across the two active
/// half-time planes.
///
/// A `Field` owns three flat arrays indexed by raw storage index:
/// `so0` (zeroth-order coefficient, the reconstructed value), `so1`
/// (first-order coefficient, the spatial slope) — both `xsize * nvar`
/// long with variables interleaved per slot — and `cfl` (the per-element
/// stability number). It also carries the configured time increment and
/// its half and quarter fractions, which appear throughout the flux
/// formulas.
///
/// A `Field` is exclusively owned by one solver. Element handles borrow
/// it and never outlive it; they carry no storage of their own.
#[derive(Debug, PartialEq)]
pub struct Field {
    grid: Arc<Grid>,
    nvar: usize,
    time_increment: f64,
    hdt: f64,
    qdt: f64,
    so0: Vec<f64>,
    so1: Vec<f64>,
    cfl: Vec<f64>,
}

impl Field {
    /// Allocate zero-initialized storage sized to the grid's padded slot
    /// count, and derive the half and quarter time increments.
    ///
    /// # Errors
    ///
    /// - [`FieldError::ZeroVariables`] if `nvar == 0`
    /// - [`FieldError::InvalidTimeIncrement`] if `time_increment` is not
    ///   finite and positive
    pub fn new(grid: Arc<Grid>, nvar: usize, time_increment: f64) -> Result<Self, FieldError> {
        if nvar == 0 {
            return Err(FieldError::ZeroVariables);
        }
        if !time_increment.is_finite() || time_increment <= 0.0 {
            return Err(FieldError::InvalidTimeIncrement { time_increment });
        }

        let xsize = grid.xsize();
        Ok(Self {
            grid,
            nvar,
            time_increment,
            hdt: time_increment / 2.0,
            qdt: time_increment / 4.0,
            so0: vec![0.0; xsize * nvar],
            so1: vec![0.0; xsize * nvar],
            cfl: vec![0.0; xsize],
        })
    }

    /// The grid this field is laid out over.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Number of state variables per slot.
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// The configured full time increment.
    pub fn time_increment(&self) -> f64 {
        self.time_increment
    }

    /// Full time increment (alias of [`time_increment`](Self::time_increment)).
    pub fn dt(&self) -> f64 {
        self.time_increment
    }

    /// Half time increment: the duration of one marching step.
    pub fn hdt(&self) -> f64 {
        self.hdt
    }

    /// Quarter time increment, used by the temporal flux corrections.
    pub fn qdt(&self) -> f64 {
        self.qdt
    }

    /// Solution-element handle at a logical position.
    ///
    /// Ghost elements are addressed with negative logical indices.
    pub fn selm(&self, ielm: isize, parity: Parity) -> Selm<'_> {
        Selm::new(self, self.grid.xindex_selm(ielm, parity))
    }

    /// Mutable solution-element handle at a logical position.
    pub fn selm_mut(&mut self, ielm: isize, parity: Parity) -> SelmMut<'_> {
        let xindex = self.grid.xindex_selm(ielm, parity);
        SelmMut::new(self, xindex)
    }

    /// Solution-element handle at a raw storage index.
    pub fn selm_at(&self, xindex: usize) -> Selm<'_> {
        debug_assert!(xindex < self.grid.xsize());
        Selm::new(self, xindex)
    }

    /// Mutable solution-element handle at a raw storage index.
    pub fn selm_at_mut(&mut self, xindex: usize) -> SelmMut<'_> {
        debug_assert!(xindex < self.grid.xsize());
        SelmMut::new(self, xindex)
    }

    /// Conservation-element handle at a logical position.
    pub fn celm(&self, icelm: isize, parity: Parity) -> Celm<'_> {
        Celm::new(self, self.grid.xindex_celm(icelm, parity))
    }

    pub(crate) fn so0_at(&self, xindex: usize, iv: usize) -> f64 {
        debug_assert!(iv < self.nvar);
        self.so0[xindex * self.nvar + iv]
    }

    pub(crate) fn so1_at(&self, xindex: usize, iv: usize) -> f64 {
        debug_assert!(iv < self.nvar);
        self.so1[xindex * self.nvar + iv]
    }

    pub(crate) fn cfl_at(&self, xindex: usize) -> f64 {
        self.cfl[xindex]
    }

    pub(crate) fn set_so0_at(&mut self, xindex: usize, iv: usize, value: f64) {
        debug_assert!(iv < self.nvar);
        self.so0[xindex * self.nvar + iv] = value;
    }

    pub(crate) fn set_so1_at(&mut self, xindex: usize, iv: usize, value: f64) {
        debug_assert!(iv < self.nvar);
        self.so1[xindex * self.nvar + iv] = value;
    }

    pub(crate) fn set_cfl_at(&mut self, xindex: usize, value: f64) {
        self.cfl[xindex] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Arc<Grid> {
        Arc::new(Grid::uniform(0.0, 4.0, 4, 2).unwrap())
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_variables() {
        assert_eq!(Field::new(grid(), 0, 0.1), Err(FieldError::ZeroVariables));
    }

    #[test]
    fn new_rejects_bad_time_increment() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Field::new(grid(), 1, dt);
            assert!(
                matches!(result, Err(FieldError::InvalidTimeIncrement { .. })),
                "dt = {dt} should be rejected"
            );
        }
    }

    #[test]
    fn derived_increments() {
        let field = Field::new(grid(), 1, 0.5).unwrap();
        assert_eq!(field.time_increment(), 0.5);
        assert_eq!(field.dt(), 0.5);
        assert_eq!(field.hdt(), 0.25);
        assert_eq!(field.qdt(), 0.125);
    }

    #[test]
    fn storage_starts_zeroed() {
        let field = Field::new(grid(), 2, 0.5).unwrap();
        for ielm in field.grid().selm_indices(Parity::Even) {
            let se = field.selm(ielm, Parity::Even);
            assert_eq!(se.so0(0), 0.0);
            assert_eq!(se.so0(1), 0.0);
            assert_eq!(se.so1(0), 0.0);
            assert_eq!(se.cfl(), 0.0);
        }
    }

    // ── Slot addressing ─────────────────────────────────────────

    #[test]
    fn writes_land_in_the_addressed_slot() {
        let mut field = Field::new(grid(), 2, 0.5).unwrap();
        field.selm_mut(2, Parity::Even).set_so0(1, 7.5);
        field.selm_mut(2, Parity::Odd).set_so1(0, -1.25);

        assert_eq!(field.selm(2, Parity::Even).so0(1), 7.5);
        assert_eq!(field.selm(2, Parity::Odd).so1(0), -1.25);
        // Other variables and the other plane stay untouched.
        assert_eq!(field.selm(2, Parity::Even).so0(0), 0.0);
        assert_eq!(field.selm(2, Parity::Odd).so0(1), 0.0);
        assert_eq!(field.selm(2, Parity::Even).so1(0), 0.0);
    }

    #[test]
    fn ghost_slots_are_addressable() {
        let mut field = Field::new(grid(), 1, 0.5).unwrap();
        field.selm_mut(-1, Parity::Even).set_so0(0, 3.0);
        assert_eq!(field.selm(-1, Parity::Even).so0(0), 3.0);
        // Raw slot 0 is the even ghost one node below the domain.
        assert_eq!(field.selm_at(0).so0(0), 3.0);
    }
}

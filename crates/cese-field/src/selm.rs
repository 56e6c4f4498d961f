//! Solution-element accessors.

use cese_grid::Parity;

use crate::field::Field;

/// A solution element: the point-wise reconstruction of state (value plus
/// spatial slope) at one raw storage slot.
///
/// `Selm` is a transient, position-keyed accessor — it holds nothing but
/// a borrow of the [`Field`] and its raw index, and is constructed fresh
/// whenever an element is addressed. Its logical index and plane parity
/// are derived from the raw index through the grid's inverse mapping.
///
/// The element's reconstruction interval spans from `xneg()` to `xpos()`,
/// the two immediately adjacent raw slots; with the staggered layout
/// those are the half-node positions bracketing this element's own
/// coordinate `x()`.
#[derive(Clone, Copy)]
pub struct Selm<'a> {
    field: &'a Field,
    xindex: usize,
}

impl<'a> Selm<'a> {
    pub(crate) fn new(field: &'a Field, xindex: usize) -> Self {
        Self { field, xindex }
    }

    /// Raw storage index.
    pub fn xindex(&self) -> usize {
        self.xindex
    }

    /// Logical element index (negative for ghost elements).
    pub fn index(&self) -> isize {
        self.field.grid().selm_position(self.xindex).0
    }

    /// Plane parity derived from the raw index.
    pub fn parity(&self) -> Parity {
        self.field.grid().selm_position(self.xindex).1
    }

    /// True if this element sits on the even plane.
    pub fn on_even_plane(&self) -> bool {
        self.parity().is_even()
    }

    /// True if this element sits on the odd plane.
    pub fn on_odd_plane(&self) -> bool {
        self.parity().is_odd()
    }

    /// This element's coordinate.
    pub fn x(&self) -> f64 {
        self.field.grid().xcoord(self.xindex)
    }

    /// The element center; for a solution element this is `x()` itself.
    pub fn xctr(&self) -> f64 {
        self.x()
    }

    /// Coordinate of the neighboring slot in negative x.
    pub fn xneg(&self) -> f64 {
        self.field.grid().xcoord(self.xindex - 1)
    }

    /// Coordinate of the neighboring slot in positive x.
    pub fn xpos(&self) -> f64 {
        self.field.grid().xcoord(self.xindex + 1)
    }

    /// Width of the negative-x half of the reconstruction interval.
    pub fn dxneg(&self) -> f64 {
        self.x() - self.xneg()
    }

    /// Width of the positive-x half of the reconstruction interval.
    pub fn dxpos(&self) -> f64 {
        self.xpos() - self.x()
    }

    /// Full width of the reconstruction interval.
    pub fn dx(&self) -> f64 {
        self.xpos() - self.xneg()
    }

    /// Zeroth-order coefficient (reconstructed value) of variable `iv`.
    pub fn so0(&self, iv: usize) -> f64 {
        self.field.so0_at(self.xindex, iv)
    }

    /// First-order coefficient (spatial slope) of variable `iv`.
    pub fn so1(&self, iv: usize) -> f64 {
        self.field.so1_at(self.xindex, iv)
    }

    /// Stability number of this element.
    pub fn cfl(&self) -> f64 {
        self.field.cfl_at(self.xindex)
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
}

/// A mutable solution-element accessor.
///
/// Identical addressing to [`Selm`], with write access to the element's
/// `so0`/`so1`/`cfl` slots. Used by the marching sweep for new-plane
/// writes and by the external boundary layer for ghost updates.
pub struct SelmMut<'a> {
    field: &'a mut Field,
    xindex: usize,
}

impl<'a> SelmMut<'a> {
    pub(crate) fn new(field: &'a mut Field, xindex: usize) -> Self {
        Self { field, xindex }
    }

    /// Raw storage index.
    pub fn xindex(&self) -> usize {
        self.xindex
    }

    /// Reborrow as a shared accessor.
    pub fn as_selm(&self) -> Selm<'_> {
        Selm::new(self.field, self.xindex)
    }

    /// Zeroth-order coefficient of variable `iv`.
    pub fn so0(&self, iv: usize) -> f64 {
        self.field.so0_at(self.xindex, iv)
    }

    /// First-order coefficient of variable `iv`.
    pub fn so1(&self, iv: usize) -> f64 {
        self.field.so1_at(self.xindex, iv)
    }

    /// Stability number of this element.
    pub fn cfl(&self) -> f64 {
        self.field.cfl_at(self.xindex)
    }

    /// Write the zeroth-order coefficient of variable `iv`.
    pub fn set_so0(&mut self, iv: usize, value: f64) {
        self.field.set_so0_at(self.xindex, iv, value);
    }

    /// Write the first-order coefficient of variable `iv`.
    pub fn set_so1(&mut self, iv: usize, value: f64) {
        self.field.set_so1_at(self.xindex, iv, value);
    }

    /// Write the stability number.
    pub fn set_cfl(&mut self, value: f64) {
        self.field.set_cfl_at(self.xindex, value);
    }
}

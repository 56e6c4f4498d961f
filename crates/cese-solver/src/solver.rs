//! The [`Solver`]: half-step space-time marching over one field.

use std::sync::Arc;

use smallvec::SmallVec;

use cese_field::{Celm, Field, Selm, SelmMut};
use cese_grid::{Grid, Parity};
use cese_kernel::Kernel;

use crate::error::SolverError;

/// Per-element scratch for the variable loop; most equations carry a
/// handful of state variables, so this stays off the heap.
type VarBuf = SmallVec<[f64; 4]>;

/// Marching engine for one conservation law over one staggered grid.
///
/// A `Solver` owns the [`Field`] exclusively and advances it in place,
/// half a time increment per call to [`march_half_step`]. It tracks
/// which plane holds current data; consecutive calls alternate planes,
/// and two calls realize one full time increment.
///
/// The sweep covers interior conservation elements only. Ghost elements
/// and the even-plane boundary elements are never written here; keeping
/// them consistent between half-steps is the driver's job, through
/// [`selm_mut`](Self::selm_mut) and [`field_mut`](Self::field_mut).
///
/// The solver records a stability number per updated element as a
/// diagnostic and never acts on it; whether to stop or shrink the step
/// on a CFL violation is likewise driver policy.
pub struct Solver<K: Kernel> {
    grid: Arc<Grid>,
    field: Field,
    kernel: K,
    alpha: f64,
    plane: Parity,
    half_steps: u64,
}

impl<K: Kernel> Solver<K> {
    /// Start assembling a solver.
    pub fn builder() -> SolverBuilder<K> {
        SolverBuilder::new()
    }

    /// The grid the solver marches over.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Shared access to the solution storage.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Exclusive access to the solution storage, for initial conditions
    /// and boundary updates between half-steps.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// The equation kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The slope weighting exponent.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The plane holding current data. Starts [`Parity::Even`] and flips
    /// on every half-step.
    pub fn plane(&self) -> Parity {
        self.plane
    }

    /// Number of half-steps marched so far.
    pub fn half_steps(&self) -> u64 {
        self.half_steps
    }

    /// The configured full time increment.
    pub fn time_increment(&self) -> f64 {
        self.field.time_increment()
    }

    /// Solution-element handle; see [`Field::selm`].
    pub fn selm(&self, ielm: isize, parity: Parity) -> Selm<'_> {
        self.field.selm(ielm, parity)
    }

    /// Mutable solution-element handle; see [`Field::selm_mut`].
    pub fn selm_mut(&mut self, ielm: isize, parity: Parity) -> SelmMut<'_> {
        self.field.selm_mut(ielm, parity)
    }

    /// Conservation-element handle; see [`Field::celm`].
    pub fn celm(&self, icelm: isize, parity: Parity) -> Celm<'_> {
        self.field.celm(icelm, parity)
    }

    /// Value of variable `iv` at a solution element.
    pub fn so0(&self, ielm: isize, parity: Parity, iv: usize) -> f64 {
        self.field.selm(ielm, parity).so0(iv)
    }

    /// Slope of variable `iv` at a solution element.
    pub fn so1(&self, ielm: isize, parity: Parity, iv: usize) -> f64 {
        self.field.selm(ielm, parity).so1(iv)
    }

    /// Stability number at a solution element.
    pub fn cfl(&self, ielm: isize, parity: Parity) -> f64 {
        self.field.selm(ielm, parity).cfl()
    }

    /// Largest stability number on the current plane.
    ///
    /// Zero until the plane has been marched into at least once.
    pub fn cfl_max(&self) -> f64 {
        let mut max = 0.0_f64;
        for ielm in self.grid.selm_indices(self.plane) {
            max = max.max(self.field.selm(ielm, self.plane).cfl());
        }
        max
    }

    /// Advance the field by half a time increment.
    ///
    /// Sweeps every conservation element of the current plane in three
    /// passes and writes into the forward-tip slots on the opposite
    /// plane:
    ///
    /// 1. value pass — [`Kernel::calc_so0`], the exact flux balance;
    /// 2. slope pass — [`Kernel::calc_so1`], which reads the values the
    ///    first pass just wrote;
    /// 3. stability pass — [`Kernel::update_cfl`] on each written
    ///    element.
    ///
    /// Reads touch only old-plane slots plus the first pass's own
    /// output, and every write lands on the opposite parity, so no slot
    /// is read and overwritten within a pass. Afterwards the current
    /// plane flips and the half-step counter increments.
    pub fn march_half_step(&mut self) {
        let plane = self.plane;
        let toff = plane.offset() as isize;
        let nvar = self.field.nvar();

        // Value pass.
        for icelm in self.grid.celm_indices(plane) {
            let mut vals = VarBuf::with_capacity(nvar);
            {
                let ce = self.field.celm(icelm, plane);
                for iv in 0..nvar {
                    vals.push(self.kernel.calc_so0(&ce, iv));
                }
            }
            let mut se = self.field.selm_mut(icelm + toff, !plane);
            for (iv, value) in vals.iter().enumerate() {
                se.set_so0(iv, *value);
            }
        }

        // Slope pass.
        for icelm in self.grid.celm_indices(plane) {
            let mut vals = VarBuf::with_capacity(nvar);
            {
                let ce = self.field.celm(icelm, plane);
                for iv in 0..nvar {
                    vals.push(self.kernel.calc_so1(&ce, iv, self.alpha));
                }
            }
            let mut se = self.field.selm_mut(icelm + toff, !plane);
            for (iv, value) in vals.iter().enumerate() {
                se.set_so1(iv, *value);
            }
        }

        // Stability pass.
        for icelm in self.grid.celm_indices(plane) {
            let value = {
                let se = self.field.selm(icelm + toff, !plane);
                self.kernel.update_cfl(&se)
            };
            self.field.selm_mut(icelm + toff, !plane).set_cfl(value);
        }

        self.plane = !plane;
        self.half_steps += 1;
    }
}

/// Builder for [`Solver`]; validates the configuration at [`build`].
///
/// Grid, kernel, and time increment are mandatory. The slope weighting
/// exponent defaults to `1.0` and must be finite and non-negative; zero
/// selects the plain central slope average.
///
/// [`build`]: SolverBuilder::build
pub struct SolverBuilder<K> {
    grid: Option<Arc<Grid>>,
    kernel: Option<K>,
    time_increment: Option<f64>,
    alpha: f64,
}

impl<K: Kernel> SolverBuilder<K> {
    fn new() -> Self {
        Self {
            grid: None,
            kernel: None,
            time_increment: None,
            alpha: 1.0,
        }
    }

    /// Set the grid.
    pub fn grid(mut self, grid: Arc<Grid>) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Set the equation kernel.
    pub fn kernel(mut self, kernel: K) -> Self {
        self.kernel = Some(kernel);
        self
    }

    /// Set the full time increment; one half-step advances half of it.
    pub fn time_increment(mut self, time_increment: f64) -> Self {
        self.time_increment = Some(time_increment);
        self
    }

    /// Set the slope weighting exponent.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validate the configuration and allocate the field.
    ///
    /// # Errors
    ///
    /// - [`SolverError::MissingGrid`], [`SolverError::MissingKernel`],
    ///   [`SolverError::MissingTimeIncrement`] for absent mandatory
    ///   pieces
    /// - [`SolverError::InvalidAlpha`] for a non-finite or negative
    ///   exponent
    /// - [`SolverError::Field`] if field allocation rejects the kernel's
    ///   variable count or the time increment
    pub fn build(self) -> Result<Solver<K>, SolverError> {
        let grid = self.grid.ok_or(SolverError::MissingGrid)?;
        let kernel = self.kernel.ok_or(SolverError::MissingKernel)?;
        let time_increment = self
            .time_increment
            .ok_or(SolverError::MissingTimeIncrement)?;
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(SolverError::InvalidAlpha { alpha: self.alpha });
        }
        let field = Field::new(Arc::clone(&grid), kernel.nvar(), time_increment)?;
        Ok(Solver {
            grid,
            field,
            kernel,
            alpha: self.alpha,
            plane: Parity::Even,
            half_steps: 0,
        })
    }
}

impl<K: Kernel> Default for SolverBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

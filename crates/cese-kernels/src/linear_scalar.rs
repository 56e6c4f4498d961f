//! Linear scalar advection kernel.
//!
//! Scalar conservation law `u_t + (c·u)_x = 0` with a constant advection
//! speed `c`. The exact solution is a pure translation, which makes this
//! the benchmark equation for the marching engine: discontinuities move
//! at a known speed and the stability number is independent of the
//! state.

use cese_field::Selm;
use cese_kernel::Kernel;

use crate::error::KernelConfigError;

/// Flux calculator for linear scalar advection.
///
/// One state variable. The spatial fluxes are the same reconstruction
/// integrals as every scalar kernel's; the temporal fluxes carry the
/// physical flux `c·u` plus first-order displacement corrections, with
/// the t-correction switching sign between the backward and forward
/// faces.
#[derive(Clone, Copy, Debug)]
pub struct LinearScalar {
    velocity: f64,
}

impl LinearScalar {
    /// Create a kernel advecting at `velocity`.
    ///
    /// Zero is accepted: the equation degenerates to `u_t = 0` and the
    /// temporal fluxes vanish.
    ///
    /// # Errors
    ///
    /// [`KernelConfigError::NonFiniteVelocity`] if `velocity` is NaN or
    /// infinite.
    pub fn new(velocity: f64) -> Result<Self, KernelConfigError> {
        if !velocity.is_finite() {
            return Err(KernelConfigError::NonFiniteVelocity { velocity });
        }
        Ok(Self { velocity })
    }

    /// The constant advection speed.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl Kernel for LinearScalar {
    fn name(&self) -> &str {
        "linear_scalar"
    }

    fn nvar(&self) -> usize {
        1
    }

    /// Flux over the negative-x half interval (flux direction forward t).
    fn flux_xn(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let displacement = 0.5 * (se.x() + se.xneg()) - se.xctr();
        se.dxneg() * (se.so0(iv) + displacement * se.so1(iv))
    }

    /// Flux over the positive-x half interval (flux direction forward t).
    fn flux_xp(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let displacement = 0.5 * (se.x() + se.xpos()) - se.xctr();
        se.dxpos() * (se.so0(iv) + displacement * se.so1(iv))
    }

    /// Flux over the backward face on the t-plane (flux direction positive x).
    fn flux_tn(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let displacement = se.x() - se.xctr();
        let c = self.velocity;
        let mut ret = c * se.so0(iv); // f(u)
        ret += displacement * c * se.so1(iv); // displacement in x
        ret += se.qdt() * c * c * se.so1(iv); // displacement in t
        se.hdt() * ret
    }

    /// Flux over the forward face on the t-plane (flux direction positive x).
    fn flux_tp(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let displacement = se.x() - se.xctr();
        let c = self.velocity;
        let mut ret = c * se.so0(iv); // f(u)
        ret += displacement * c * se.so1(iv); // displacement in x
        ret -= se.qdt() * c * c * se.so1(iv); // displacement in t
        se.hdt() * ret
    }

    /// Solution value extrapolated to the forward-time tip of the element.
    fn tip_value(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let mut ret = se.so0(iv);
        ret += (se.x() - se.xctr()) * se.so1(iv); // displacement in x
        ret -= se.hdt() * self.velocity * se.so1(iv); // displacement in t
        ret
    }

    fn update_cfl(&self, se: &Selm<'_>) -> f64 {
        let hdx = se.dxneg().min(se.dxpos());
        self.velocity.abs() * se.hdt() / hdx
    }
}

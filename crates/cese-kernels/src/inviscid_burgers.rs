//! Inviscid Burgers equation kernel.
//!
//! Scalar conservation law `u_t + f(u)_x = 0` with `f(u) = u²/2`. The
//! wave speed equals the solution value itself, which makes this the
//! smallest genuinely nonlinear exercise for the marching engine: it
//! steepens smooth data into shocks while the flux balance stays exact.

use cese_field::Selm;
use cese_kernel::Kernel;

/// Flux calculator for the inviscid Burgers equation.
///
/// One state variable. The spatial fluxes integrate the linear
/// reconstruction over the element's half intervals; the temporal fluxes
/// carry the physical flux `u²/2` plus first-order displacement
/// corrections in x and t, with the t-correction switching sign between
/// the backward and forward faces.
#[derive(Clone, Copy, Debug, Default)]
pub struct InviscidBurgers;

impl InviscidBurgers {
    /// Create the Burgers kernel.
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for InviscidBurgers {
    fn name(&self) -> &str {
        "inviscid_burgers"
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
        let u = se.so0(iv);
        let u2 = u * u;
        let mut ret = 0.5 * u2; // f(u)
        ret += displacement * u * se.so1(iv); // displacement in x
        ret += se.qdt() * u2 * se.so1(iv); // displacement in t
        se.hdt() * ret
    }

    /// Flux over the forward face on the t-plane (flux direction positive x).
    fn flux_tp(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let displacement = se.x() - se.xctr();
        let u = se.so0(iv);
        let u2 = u * u;
        let mut ret = 0.5 * u2; // f(u)
        ret += displacement * u * se.so1(iv); // displacement in x
        ret -= se.qdt() * u2 * se.so1(iv); // displacement in t
        se.hdt() * ret
    }

    /// Solution value extrapolated to the forward-time tip of the element.
    fn tip_value(&self, se: &Selm<'_>, iv: usize) -> f64 {
        let mut ret = se.so0(iv);
        ret += (se.x() - se.xctr()) * se.so1(iv); // displacement in x
        ret -= se.hdt() * se.so1(iv); // displacement in t
        ret
    }

    fn update_cfl(&self, se: &Selm<'_>) -> f64 {
        let hdx = se.dxneg().min(se.dxpos());
        se.so0(0).abs() * se.hdt() / hdx
    }
}

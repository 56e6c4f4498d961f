//! The [`Kernel`] trait and its provided integration methods.

use cese_field::{Celm, Selm};

/// Flux and reconstruction rules for one physical conservation law.
///
/// # Contract
///
/// - All methods are pure functions of the passed element and the
///   kernel's own configuration: a kernel is stateless with respect to
///   the mesh and may be invoked for any element in any order.
/// - `flux_xn`/`flux_xp` integrate the reconstruction over the negative
///   and positive halves of the element's spatial interval; their flux
///   direction is forward in time.
/// - `flux_tn`/`flux_tp` integrate the physical flux over the element's
///   backward and forward temporal faces; their flux direction is
///   positive in x. The two differ only in the sign of the quarter-step
///   correction, which is what lets them balance exactly under uniform
///   advection.
/// - `tip_value` extrapolates the reconstruction to the element's
///   forward-time tip.
/// - `update_cfl` returns the element's local stability number; the
///   engine stores it as a diagnostic and never acts on it.
///
/// # Examples
///
/// A flux-free kernel whose conservation update just averages the two
/// spatial neighbors:
///
/// ```
/// use cese_field::Selm;
/// use cese_kernel::Kernel;
///
/// struct Resting;
///
/// impl Kernel for Resting {
///     fn name(&self) -> &str { "resting" }
///     fn nvar(&self) -> usize { 1 }
///     fn flux_xn(&self, se: &Selm<'_>, iv: usize) -> f64 { se.dxneg() * se.so0(iv) }
///     fn flux_xp(&self, se: &Selm<'_>, iv: usize) -> f64 { se.dxpos() * se.so0(iv) }
///     fn flux_tn(&self, _se: &Selm<'_>, _iv: usize) -> f64 { 0.0 }
///     fn flux_tp(&self, _se: &Selm<'_>, _iv: usize) -> f64 { 0.0 }
///     fn tip_value(&self, se: &Selm<'_>, iv: usize) -> f64 { se.so0(iv) }
///     fn update_cfl(&self, _se: &Selm<'_>) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Resting.name(), "resting");
/// ```
pub trait Kernel: Send + 'static {
    /// Human-readable kernel name for diagnostics.
    fn name(&self) -> &str;

    /// Number of state variables this equation carries per element.
    fn nvar(&self) -> usize;

    /// Spatial flux over the negative-x half interval of `se`.
    fn flux_xn(&self, se: &Selm<'_>, iv: usize) -> f64;

    /// Spatial flux over the positive-x half interval of `se`.
    fn flux_xp(&self, se: &Selm<'_>, iv: usize) -> f64;

    /// Temporal flux over the backward (behind) face of `se`.
    fn flux_tn(&self, se: &Selm<'_>, iv: usize) -> f64;

    /// Temporal flux over the forward (ahead) face of `se`.
    fn flux_tp(&self, se: &Selm<'_>, iv: usize) -> f64;

    /// Reconstruction value at the forward-time tip of `se`.
    fn tip_value(&self, se: &Selm<'_>, iv: usize) -> f64;

    /// Local stability number of `se`.
    fn update_cfl(&self, se: &Selm<'_>) -> f64;

    /// New zeroth-order coefficient of `ce` at the forward plane: the
    /// exact flux balance over the diamond control volume.
    ///
    /// The negative-x neighbor contributes through its positive spatial
    /// half and its forward temporal face; the positive-x neighbor
    /// through its negative spatial half and (with opposite orientation)
    /// its backward temporal face. The sum is normalized by the new
    /// element's spatial span. With constant state and zero slope the
    /// temporal terms cancel and the spatial terms integrate back to the
    /// constant, which is the discrete conservation statement.
    fn calc_so0(&self, ce: &Celm<'_>, iv: usize) -> f64 {
        let se_xn = ce.selm_xn();
        let se_xp = ce.selm_xp();
        let flux_n = self.flux_xp(&se_xn, iv) + self.flux_tp(&se_xn, iv);
        let flux_p = self.flux_xn(&se_xp, iv) - self.flux_tn(&se_xp, iv);
        (flux_n + flux_p) / ce.selm_tp().dx()
    }

    /// New first-order coefficient of `ce` at the forward plane.
    ///
    /// Reconstructs the slope from the two one-sided gradients between
    /// the neighbors' tip values and the just-written new `so0` of this
    /// element, weighted by the opposite gradient's magnitude raised to
    /// `alpha`. `alpha = 0` reduces to the central average, exact for
    /// linear data on uniform spacing; larger exponents bias toward the
    /// smoother side near discontinuities.
    ///
    /// Must be called after the new `so0` has been stored in this celm's
    /// `selm_tp` slot.
    fn calc_so1(&self, ce: &Celm<'_>, iv: usize, alpha: f64) -> f64 {
        let se_tp = ce.selm_tp();
        let utp = se_tp.so0(iv);
        let upn = self.tip_value(&ce.selm_xn(), iv);
        let upp = self.tip_value(&ce.selm_xp(), iv);
        let duxn = (utp - upn) / se_tp.dxneg();
        let duxp = (upp - utp) / se_tp.dxpos();
        let wn = duxp.abs().powf(alpha);
        let wp = duxn.abs().powf(alpha);
        let den = wn + wp;
        if den > 0.0 {
            (wp * duxp + wn * duxn) / den
        } else {
            0.0
        }
    }
}

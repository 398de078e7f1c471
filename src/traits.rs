use core::fmt::Debug;
use num_traits::Float;

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for real floating-point arguments of the special functions.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32` and `f64`.
pub trait FloatScalar: Copy + PartialEq + Debug + Float {}

impl<T: Copy + PartialEq + Debug + Float> FloatScalar for T {}

/// Element types that can evaluate the gamma function in place.
///
/// Covers both real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`), so generic code can call `x.tgamma()` through one bound.
///
/// ```
/// use cgamma::GammaScalar;
///
/// assert!((5.0_f64.tgamma() - 24.0).abs() < 1e-9);
/// ```
pub trait GammaScalar: Copy {
    /// Γ(self).
    fn tgamma(self) -> Self;
}

macro_rules! impl_gamma_scalar_real {
    ($($t:ty),*) => {
        $(
            impl GammaScalar for $t {
                #[inline] fn tgamma(self) -> $t { crate::special::gamma(self) }
            }
        )*
    };
}

impl_gamma_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> GammaScalar for Complex<T> {
    #[inline]
    fn tgamma(self) -> Self {
        crate::special::complex_gamma(self)
    }
}

//! Gamma function via Luke's series, for real and complex arguments.

use crate::FloatScalar;
use super::{LUKE_SHIFT, LUKE_SQRT_2PI, luke_sum};

#[cfg(feature = "complex")]
use num_complex::Complex;
#[cfg(feature = "complex")]
use super::SpecialError;

/// Largest left shift evaluated. Below re = −MAX_LEFT_SHIFT, |Γ| is under
/// the smallest subnormal for every non-pole argument.
const MAX_LEFT_SHIFT: f64 = 400.0;

/// Gamma function Γ(x) for real x.
///
/// Evaluates Luke's series for x ≥ 0. For x < 0 the argument is shifted
/// right with Γ(x) = Γ(x+1)/x until it is non-negative, then the series
/// value is divided by each skipped factor.
///
/// No special-casing of poles: Γ(0) is +infinity (H_1 = −1/0 drives the
/// series to +inf) and negative integers give ±infinity. NaN input passes
/// through and −infinity returns NaN. For x < −400, where Γ underflows,
/// the shift is skipped: the result is 0, or NaN if x is an integer.
///
/// # Example
///
/// ```
/// use cgamma::special::gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((gamma(5.0_f64) - 24.0).abs() < 1e-9);
///
/// // Γ(−0.5) = −2√π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(-0.5_f64) + 2.0 * sqrt_pi).abs() < 1e-9);
/// ```
pub fn gamma<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    // NaN passthrough
    if x.is_nan() {
        return x;
    }

    if x.is_infinite() && x < zero {
        return T::nan();
    }
    if x < -T::from(MAX_LEFT_SHIFT).unwrap() {
        return if x == x.floor() { T::nan() } else { zero };
    }

    // Shift into x >= 0; `last` is the final factor x+k-1
    let mut shifted = x;
    let mut last = x;
    let mut steps = 0usize;
    while shifted < zero {
        last = shifted;
        shifted = shifted + one;
        steps += 1;
    }

    // Divide by x+k-1 first and x last. Stepping down from `last` is exact
    // since every earlier factor has |re| >= 1.
    let mut result = luke_real(shifted);
    let mut factor = last;
    for _ in 0..steps {
        result = result / factor;
        factor = factor - one;
    }
    result
}

/// Luke's series for real x ≥ 0.
fn luke_real<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let w = x - one;
    let t = w + T::from(LUKE_SHIFT).unwrap();
    let sqrt_2pi = T::from(LUKE_SQRT_2PI).unwrap();

    sqrt_2pi * (-t).exp() * t.powf(w + half) * luke_sum(w, |c: T| c)
}

/// Gamma function Γ(z) for complex z.
///
/// Y. L. Luke's approximation: with w = z − 1,
///
/// Γ(z) ≈ √(2π) · e^{−(w+5.5)} · (w+5.5)^{w+0.5} · Σ c_n·H_n
///
/// where H_0 = 1 and H_n = H_{n−1}·(w+1−n)/(w+n). The power is the
/// principal branch ([`Complex::powc`]). For re(z) < 0 the recurrence
/// Γ(z) = Γ(z+1)/z is applied in a loop until re(z) ≥ 0, dividing by one
/// factor at a time from z+k−1 down to z, which gives the same bits as the
/// recursive form.
///
/// No guarantees about precision, and no guard at the poles: z = 0 and
/// negative integers produce NaN/infinite components rather than an error.
/// Use [`try_complex_gamma`] to detect them.
///
/// For re(z) < −400 the result has underflowed and the shift is skipped:
/// `0 + 0i`, or `NaN + NaN·i` on a pole. A real part of −infinity also
/// returns `NaN + NaN·i`.
///
/// # Example
///
/// ```
/// use cgamma::special::complex_gamma;
/// use num_complex::Complex;
///
/// let g = complex_gamma(Complex::new(1.0_f64, 0.0));
/// assert!((g.re - 1.0).abs() < 1e-9 && g.im.abs() < 1e-9);
///
/// // Γ(1 + i) ≈ 0.49802 − 0.15495i
/// let g = complex_gamma(Complex::new(1.0_f64, 1.0));
/// assert!((g.re - 0.498015668118356).abs() < 1e-9);
/// assert!((g.im + 0.154949828301811).abs() < 1e-9);
/// ```
#[cfg(feature = "complex")]
pub fn complex_gamma<T: FloatScalar>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();

    if z.re.is_infinite() && z.re < zero {
        return Complex::new(T::nan(), T::nan());
    }
    if z.re < -T::from(MAX_LEFT_SHIFT).unwrap() {
        if z.im == zero && z.re == z.re.floor() {
            return Complex::new(T::nan(), T::nan());
        }
        return Complex::new(zero, zero);
    }

    // Shift into re(z) >= 0; `last` is the final factor z+k-1
    let mut shifted = z;
    let mut last = z;
    let mut steps = 0usize;
    while shifted.re < zero {
        last = shifted;
        shifted = shifted + one;
        steps += 1;
    }

    let mut result = luke_complex(shifted);
    let mut factor = last;
    for _ in 0..steps {
        result = result / factor;
        factor = factor - one;
    }
    result
}

/// Luke's series for complex z with re(z) ≥ 0.
#[cfg(feature = "complex")]
fn luke_complex<T: FloatScalar>(z: Complex<T>) -> Complex<T> {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let w = z - one;
    let t = w + T::from(LUKE_SHIFT).unwrap();
    let sqrt_2pi = T::from(LUKE_SQRT_2PI).unwrap();
    let s = luke_sum(w, |c: T| Complex::new(c, T::zero()));

    (-t).exp() * sqrt_2pi * t.powc(w + half) * s
}

/// Checked gamma function Γ(z) for complex z.
///
/// Same evaluation as [`complex_gamma`], but reports the cases where it
/// would return NaN or infinite components:
///
/// - [`SpecialError::DomainError`] if either component of `z` is NaN or infinite,
/// - [`SpecialError::Pole`] if `z` is 0 or a negative integer,
/// - [`SpecialError::Overflow`] if the result is not finite.
///
/// # Example
///
/// ```
/// use cgamma::special::{try_complex_gamma, SpecialError};
/// use num_complex::Complex;
///
/// let g = try_complex_gamma(Complex::new(3.0_f64, 0.0)).unwrap();
/// assert!((g.re - 2.0).abs() < 1e-9);
///
/// assert_eq!(
///     try_complex_gamma(Complex::new(-2.0_f64, 0.0)),
///     Err(SpecialError::Pole)
/// );
/// ```
#[cfg(feature = "complex")]
pub fn try_complex_gamma<T: FloatScalar>(z: Complex<T>) -> Result<Complex<T>, SpecialError> {
    let zero = T::zero();

    if !(z.re.is_finite() && z.im.is_finite()) {
        return Err(SpecialError::DomainError);
    }

    // Non-positive integers on the real axis
    if z.im == zero && z.re <= zero && z.re == z.re.floor() {
        return Err(SpecialError::Pole);
    }

    let g = complex_gamma(z);
    if !(g.re.is_finite() && g.im.is_finite()) {
        return Err(SpecialError::Overflow);
    }
    Ok(g)
}

//! Special mathematical functions.
//!
//! Provides the gamma function for real and complex arguments, evaluated with
//! Y. L. Luke's fixed-coefficient series ("The Special Functions and Their
//! Approximation", vol II, p 304). All functions are generic over
//! [`FloatScalar`] (f32/f64), no-std compatible, and stack-only.
//!
//! No guarantees about precision: for moderate arguments the relative error
//! is around 1e-11 in f64.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x) for real x |
//! | `complex_gamma` | Gamma function Γ(z) for complex z (`complex` feature) |
//! | `try_complex_gamma` | Checked Γ(z), reports poles and overflow (`complex` feature) |
//!
//! # Example
//!
//! ```
//! use cgamma::special::gamma;
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-9);
//!
//! // Γ(0.5) = √π
//! assert!((gamma(0.5_f64) - core::f64::consts::PI.sqrt()).abs() < 1e-9);
//! ```

use core::fmt;

use crate::FloatScalar;

mod gamma_fn;


pub use gamma_fn::gamma;
#[cfg(feature = "complex")]
pub use gamma_fn::{complex_gamma, try_complex_gamma};

/// Errors from checked special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Argument is a pole of the function (0, −1, −2, … for gamma).
    Pole,
    /// Argument has a NaN or infinite component.
    DomainError,
    /// Result is not representable (non-finite) at a regular argument.
    Overflow,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pole => write!(f, "argument is a pole of the function"),
            Self::DomainError => write!(f, "input outside function domain"),
            Self::Overflow => write!(f, "result is not finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

// ---------------------------------------------------------------------------
// Luke approximation constants
// Y. L. Luke, vol II, p 304.
// ---------------------------------------------------------------------------

/// Series coefficients, applied to the running ratio H_n.
pub const LUKE_COEFFS: [f64; 7] = [
    41.624436916439068,
    -51.224241022374774,
    11.338755813488977,
    -0.747732687772388,
    0.008782877493061,
    -1.899030264e-6,
    1.946335e-9,
];

/// Prefactor √(2π), truncated as in the published table.
pub const LUKE_SQRT_2PI: f64 = 2.506628274631;

/// Shift applied to w = z − 1 in the exponential and power terms.
pub const LUKE_SHIFT: f64 = 5.5;

/// Evaluate the Luke series s(w) = c0 + Σ c_n·H_n with
/// H_n = H_{n−1}·(w + 1 − n)/(w + n), H_0 = 1.
///
/// Generic over the element type so the real and complex paths share it;
/// `from_real` lifts a real constant into `S`.
#[inline]
pub(crate) fn luke_sum<T, S, F>(w: S, from_real: F) -> S
where
    T: FloatScalar,
    S: Copy
        + core::ops::Add<Output = S>
        + core::ops::Sub<Output = S>
        + core::ops::Mul<Output = S>
        + core::ops::Div<Output = S>,
    F: Fn(T) -> S,
{
    let one = from_real(T::one());
    let mut sum = from_real(T::from(LUKE_COEFFS[0]).unwrap());
    let mut h = one;
    for (i, &c) in LUKE_COEFFS[1..].iter().enumerate() {
        let n = from_real(T::from(i + 1).unwrap());
        h = h * ((w + one - n) / (w + n));
        sum = sum + from_real(T::from(c).unwrap()) * h;
    }
    sum
}

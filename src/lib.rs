//! # cgamma
//!
//! Gamma function for complex arguments, evaluated with Y. L. Luke's
//! fixed-coefficient series. Pure Rust, no-std compatible, no heap allocation.
//! No guarantees about precision.
//!
//! ## Quick start
//!
//! ```
//! use cgamma::special::gamma;
//!
//! // Γ(3) = 2! = 2
//! assert!((gamma(3.0_f64) - 2.0).abs() < 1e-9);
//! ```
//!
//! With the `complex` feature:
//!
//! ```
//! # #[cfg(feature = "complex")]
//! # {
//! use cgamma::{complex_gamma, Complex};
//!
//! // Γ(0.5) = √π, imaginary part vanishes on the real axis
//! let g = complex_gamma(Complex::new(0.5_f64, 0.0));
//! assert!((g.re - core::f64::consts::PI.sqrt()).abs() < 1e-9);
//! assert!(g.im.abs() < 1e-12);
//!
//! // Left half-plane via Γ(z) = Γ(z+1)/z
//! let z = Complex::new(-1.5_f64, 0.75);
//! let lhs = complex_gamma(z);
//! let rhs = complex_gamma(z + 1.0) / z;
//! assert!((lhs - rhs).norm() < 1e-12 * lhs.norm());
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`special`] — Gamma function Γ(x) for real arguments, and with the
//!   `complex` feature Γ(z) for complex arguments plus a checked variant that
//!   reports poles and overflow through [`special::SpecialError`].
//!
//! - [`traits`] — Element traits:
//!   - [`FloatScalar`] — real floats (`f32`, `f64`)
//!   - [`GammaScalar`] — `x.tgamma()` on reals and complex numbers alike
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |
//!
//! The pure-Rust `libm` float fallback is always enabled on `num-traits` and
//! `num-complex`, so `default-features = false` builds need nothing extra.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;
pub mod traits;

#[cfg(feature = "complex")]
pub use special::complex_gamma;
pub use special::gamma;
pub use traits::{FloatScalar, GammaScalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;

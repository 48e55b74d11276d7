//! Models of the prime field and of the extension tower built above it:
//!
//! - `Fp384` capturing moduli of length 6 words of 64 bits, together with
//!   its double-width (unreduced) companion types,
//! - the quadratic extension of the prime field,
//! - the cubic extension above the quadratic one,
//! - the quadratic extension above the sextic one, of degree 12 overall,
//!   carrying the cyclotomic-subgroup routines.

pub mod fp_384;
pub use self::fp_384::*;

pub mod double;
pub use self::double::*;

pub mod fp2;
pub use self::fp2::*;

pub mod fp6_3over2;
pub use self::fp6_3over2::*;

pub mod fp12_2over3over2;
pub use self::fp12_2over3over2::*;

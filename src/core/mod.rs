//! Internal computational core (spec §4): everything here works directly on
//! bare `Digit` slices at an explicit [`Radix`], with no awareness of the
//! [`crate::poly::Poly`] container or [`crate::error::Gf2xError`] that the
//! public [`crate::ops`] surface wraps around it.

pub mod bits;
pub mod divmod;
pub mod inverse;
pub mod karatsuba;
pub mod mul_small;
pub mod primitives;
pub mod schoolbook;
pub mod square;

//! gf2x-engine - arbitrary-precision arithmetic for polynomials over GF(2)
//!
//! ## Operations
//!
//! Carry-less multiply, bit-spread squaring, Newton-iterated multiplicative
//! inverse to arbitrary precision, and reciprocal-driven Euclidean division,
//! all working on digit vectors at a caller-chosen radix (`S = 15` or `S =
//! 30` significant bits per digit).
//!
//! ## Backends
//!
//! Three interchangeable small-operand backends are selected at runtime by
//! CPU feature probe: hardware carry-less multiply (`pclmulqdq` on x86_64,
//! `pmull` on aarch64), a portable 8-bit-lane shift-and-xor fallback, and a
//! pure lookup-table backend for targets with neither. See
//! `core::primitives` for the dispatch contract.
//!
//! ## Entry points
//!
//! [`ops::mul`], [`ops::sqr`], [`ops::inv`], and [`ops::divmod`] are the
//! public surface; each takes a [`poly::Poly`] and an [`config::EngineConfig`].

pub mod config;
pub mod core;
pub mod error;
pub mod ops;
pub mod poly;
pub mod radix;

pub use config::EngineConfig;
pub use core::primitives::PrimitiveBackend;
pub use error::Gf2xError;
pub use ops::{divmod, inv, mul, sqr};
pub use poly::Poly;
pub use radix::Radix;

//! Public entry points (spec §6): validate against [`EngineConfig`], dispatch
//! into [`crate::core`], and wrap the result back up as a [`Poly`].

use log::{debug, trace};

use crate::config::EngineConfig;
use crate::core::{divmod as divmod_core, inverse, karatsuba, square};
use crate::error::Gf2xError;
use crate::poly::Poly;

fn check_operand(p: &Poly, cfg: &EngineConfig) -> Result<(), Gf2xError> {
    let bits = p.nbits();
    if bits > cfg.max_bits {
        return Err(Gf2xError::OperandTooLarge { bits, max_bits: cfg.max_bits });
    }
    Ok(())
}

/// `a * b` as GF(2)[x] polynomials.
pub fn mul(a: &Poly, b: &Poly, cfg: &EngineConfig) -> Result<Poly, Gf2xError> {
    check_operand(a, cfg)?;
    check_operand(b, cfg)?;
    let backend = cfg.backend();
    debug!("mul: nbits(a)={}, nbits(b)={}, backend={:?}", a.nbits(), b.nbits(), backend);

    let mut out = vec![0u32; a.digits().len() + b.digits().len()];
    karatsuba::mul(&mut out, a.digits(), b.digits(), cfg.radix, backend, cfg.parallel_threshold, cfg.karatsuba_limit);
    Ok(Poly::from_digits(cfg.radix, out))
}

/// `a^2` as a GF(2)[x] polynomial.
pub fn sqr(a: &Poly, cfg: &EngineConfig) -> Result<Poly, Gf2xError> {
    check_operand(a, cfg)?;
    let backend = cfg.backend();
    trace!("sqr: nbits(a)={}, backend={:?}", a.nbits(), backend);

    let mut out = vec![0u32; 2 * a.digits().len()];
    square::square_n(&mut out, a.digits(), cfg.radix, backend);
    Ok(Poly::from_digits(cfg.radix, out))
}

/// Multiplicative inverse of `d` to `precision_bits` bits of accuracy:
/// `e` such that `e*d == (1 << (precision_bits + nbits(d) - 2)) + r` with
/// `r` narrower than `d`.
pub fn inv(d: &Poly, precision_bits: u32, cfg: &EngineConfig) -> Result<Poly, Gf2xError> {
    check_operand(d, cfg)?;
    if d.is_zero() {
        return Err(Gf2xError::DivisionByZero);
    }
    if precision_bits == 0 || precision_bits > cfg.max_bits {
        return Err(Gf2xError::InvalidPrecision { precision: precision_bits });
    }
    let backend = cfg.backend();
    debug!("inv: nbits(d)={}, precision_bits={}, backend={:?}", d.nbits(), precision_bits, backend);

    let ndigs_e = cfg.radix.ndigits_for_bits(precision_bits);
    let mut e = vec![0u32; ndigs_e];
    inverse::inverse(
        &mut e,
        ndigs_e,
        precision_bits,
        d.digits(),
        d.nbits(),
        cfg.radix,
        backend,
        cfg.parallel_threshold,
        cfg.karatsuba_limit,
    );
    Ok(Poly::from_digits(cfg.radix, e))
}

/// Euclidean `(quotient, remainder)` of `u / d`.
pub fn divmod(u: &Poly, d: &Poly, cfg: &EngineConfig) -> Result<(Poly, Poly), Gf2xError> {
    check_operand(u, cfg)?;
    check_operand(d, cfg)?;
    if d.is_zero() {
        return Err(Gf2xError::DivisionByZero);
    }
    let backend = cfg.backend();
    debug!("divmod: nbits(u)={}, nbits(d)={}, backend={:?}", u.nbits(), d.nbits(), backend);

    let (q, r) = divmod_core::divmod(
        u.digits(),
        u.nbits(),
        d.digits(),
        d.nbits(),
        cfg.radix,
        backend,
        cfg.parallel_threshold,
        cfg.bitwise_div_limit,
        cfg.karatsuba_limit,
    );
    Ok((Poly::from_digits(cfg.radix, q), Poly::from_digits(cfg.radix, r)))
}

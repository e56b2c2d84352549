//! Bounded schoolbook multiply (spec §4.4): the base case Karatsuba recurses
//! down to, and the sole implementation used below [`karatsuba_limit`]
//! digits.
//!
//! Ported from `mul_nl_nr_IMPL` in `examples/original_source/c_ext/generic.h`:
//! accumulate each output digit `p[ip]` from every `(l[il], r[ir])` pair with
//! `il + ir == ip`, using a double-digit accumulator so carries across the
//! per-digit XOR settle the same way `mul_small_nr` settles them.

use crate::core::primitives::{self, PrimitiveBackend};
use crate::radix::{Digit, DoubleDigit, Radix};

/// The backend-tuned default crossover below which Karatsuba falls through
/// to the plain schoolbook double loop instead of recursing; callers reach
/// this through [`crate::config::EngineConfig::karatsuba_limit`], which
/// starts from this value but can be overridden.
///
/// Table lookups are already cheap per call, so a shorter shorter-operand
/// cutoff pays off; the software/hardware carry-less backends benefit from
/// batching more digits into fewer, larger recursive splits.
pub fn karatsuba_limit(backend: PrimitiveBackend) -> usize {
    match backend {
        PrimitiveBackend::Table => 4,
        PrimitiveBackend::Lanes8 | PrimitiveBackend::Clmul => 16,
    }
}

/// `p[0..nl+nr) ^= l[0..nl) * r[0..nr)`.
pub fn mul_small_block(
    p: &mut [Digit],
    l: &[Digit],
    nl: usize,
    r: &[Digit],
    nr: usize,
    radix: Radix,
    backend: PrimitiveBackend,
) {
    debug_assert!(l.len() >= nl);
    debug_assert!(r.len() >= nr);
    debug_assert!(p.len() >= nl + nr);

    if nl == 0 || nr == 0 {
        return;
    }

    let mask = radix.mask();
    let s = radix.bits();

    for ip in 0..nl + nr - 1 {
        let il_start = ip.saturating_sub(nr - 1);
        let il_end = ip.min(nl - 1);
        let mut acc: DoubleDigit = 0;
        for il in il_start..=il_end {
            let ir = ip - il;
            acc ^= primitives::mul_digit(backend, radix, l[il], r[ir]);
        }
        p[ip] ^= (acc as Digit) & mask;
        p[ip + 1] ^= (acc >> s) as Digit;
    }
}

//! Multiplicative inverse to chosen precision (spec §4.6): a Newton-iterated
//! reciprocal seeded from an 8-bit lookup table, then doubled in a ladder
//! that avoids a costly final partial step.
//!
//! Ported from `inverse` in `examples/original_source/c_ext/inverse.h`.

use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::core::karatsuba;
use crate::core::primitives::{self, clmul_bits, PrimitiveBackend};
use crate::core::square::square_n;
use crate::radix::{Digit, Radix};

type Scratch = SmallVec<[Digit; 32]>;

fn zeroed(n: usize) -> Scratch {
    let mut v = Scratch::new();
    v.resize(n, 0);
    v
}

/// For each 8-bit denominator `dh` with its top bit set, the unique 8-bit
/// `e` (top bit set) such that `e*dh == (1<<14) + r` with `r < 1<<7`.
///
/// Computed by brute-force search over the 128x128 table at first use
/// rather than transcribed, so a copy error in a literal table can't creep
/// in silently.
fn inv8_table() -> &'static [u8; 128] {
    static TABLE: OnceLock<[u8; 128]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u8; 128];
        for (idx, slot) in table.iter_mut().enumerate() {
            let dh = 128 + idx as u64;
            let mut found = None;
            for e_idx in 0..128u64 {
                let e = 128 + e_idx;
                let prod = clmul_bits(e, dh, 8) as u32;
                if (prod >> 7) == 128 {
                    found = Some(e as u8);
                    break;
                }
            }
            *slot = found.expect("an 8-bit reciprocal always exists for a normalized denominator");
        }
        table
    })
}

fn inv8(dh: u8) -> u8 {
    inv8_table()[(dh as usize) - 128]
}

/// Left-align `d_digits` (`nbits_d` significant bits) into a freshly
/// allocated `ndigs_e`-digit buffer so the denominator's leading bit sits at
/// the top of the highest digit, truncating or zero-padding from the right
/// as needed to reach exactly `ndigs_e` digits.
fn left_align(d_digits: &[Digit], ndigs_d: usize, nbits_d: u32, ndigs_e: usize, radix: Radix) -> Scratch {
    let s = radix.bits();
    let mask = radix.mask();
    let shift = (s - 1) - (nbits_d - 1) % s;
    let diff = ndigs_d as isize - ndigs_e as isize;
    let n0 = diff.max(0) as usize;

    let get = |n: isize| -> Digit {
        if n < 0 {
            0
        } else {
            d_digits.get(n as usize).copied().unwrap_or(0)
        }
    };

    let mut d = zeroed(ndigs_e);
    if ndigs_d == 0 {
        return d;
    }
    for n in ((n0 + 1)..ndigs_d).rev() {
        let dst = (n as isize - diff) as usize;
        d[dst] = ((get(n as isize) << shift) & mask) | (get(n as isize - 1) >> (s - shift));
    }
    let dst0 = (n0 as isize - diff) as usize;
    d[dst0] = (get(n0 as isize) << shift) & mask;
    if n0 > 0 {
        d[dst0] |= get(n0 as isize - 1) >> (s - shift);
    }
    d
}

/// Compute `e_digits[0..ndigs_e)` such that `e*d == (1 << (nbits_e+nbits_d-2)) + r`
/// with `r` of fewer than `nbits_d` bits. `nbits_e` may be smaller, equal to,
/// or larger than `nbits_d`, giving an inverse of arbitrary precision.
#[allow(clippy::too_many_arguments)]
pub fn inverse(
    e_digits: &mut [Digit],
    ndigs_e: usize,
    nbits_e: u32,
    d_digits: &[Digit],
    nbits_d: u32,
    radix: Radix,
    backend: PrimitiveBackend,
    parallel_threshold: usize,
    karatsuba_limit: usize,
) {
    debug_assert!(nbits_d > 0 && nbits_e > 0);
    debug_assert_eq!(ndigs_e, radix.ndigits_for_bits(nbits_e) as usize);

    let s = radix.bits();
    let mask = radix.mask();
    let ndigs_d = radix.ndigits_for_bits(nbits_d) as usize;
    let mut d = left_align(d_digits, ndigs_d, nbits_d, ndigs_e, radix);
    let last = ndigs_e - 1;

    if nbits_e <= 8 {
        let dh = d[last] >> (s - nbits_e);
        let dh8 = (dh << (8 - nbits_e)) as u8;
        e_digits[last] = (inv8(dh8) >> (8 - nbits_e)) as Digit;
        return;
    }

    {
        let dh8 = (d[last] >> (s - 8)) as u8;
        e_digits[last] = inv8(dh8) as Digit;
    }

    if nbits_e <= 15 {
        let dh = d[last] >> (s - nbits_e);
        let x2 = primitives::sqr_15(backend, e_digits[last] as u16);
        e_digits[last] = (primitives::mul_15_15(backend, x2 as u16, dh as u16) >> 14) as Digit;
        return;
    }
    {
        let dh = d[last] >> (s - 15);
        let x2 = primitives::sqr_15(backend, e_digits[last] as u16);
        e_digits[last] = (primitives::mul_15_15(backend, x2 as u16, dh as u16) >> 14) as Digit;
    }

    if radix == Radix::Bits30 {
        if nbits_e <= 30 {
            let dh = d[last] >> (s - nbits_e);
            let x2 = primitives::sqr_15(backend, e_digits[last] as u16);
            e_digits[last] = (primitives::mul_30_30(backend, x2, dh) >> 28) as Digit;
            return;
        }
        let dh = d[last];
        let x2 = primitives::sqr_15(backend, e_digits[last] as u16);
        e_digits[last] = (primitives::mul_30_30(backend, x2, dh) >> 28) as Digit;
    }

    // e_digits[last] now holds one fully correct digit. Build the doubling
    // ladder: each bit of double_mask (read back to front below) decides
    // whether a step doubles the correct digit count exactly or by one less,
    // so the final step never has to do almost all the work alone.
    let mut double_mask: u32 = 0;
    let mut ncorrect = ndigs_e;
    while ncorrect > 1 {
        double_mask = (double_mask << 1) | (ncorrect as u32 & 1);
        ncorrect = (ncorrect >> 1) + (ncorrect & 1);
    }

    let x2len = (ndigs_e & 1) + ndigs_e;
    let mut x2 = zeroed(x2len);
    let mut etmp = zeroed(x2len << 1);

    let mut ncorrect = 1usize;
    while ncorrect < ndigs_e {
        let ncorrect_new = (ncorrect << 1) - (double_mask & 1) as usize;
        double_mask >>= 1;

        let nx2 = ncorrect << 1;
        square_n(&mut x2[..nx2], &e_digits[ndigs_e - ncorrect..ndigs_e], radix, backend);

        let nn = ncorrect_new + nx2;
        etmp[..nn].fill(0);
        karatsuba::mul(
            &mut etmp[..nn],
            &d[ndigs_e - ncorrect_new..ndigs_e],
            &x2[..nx2],
            radix,
            backend,
            parallel_threshold,
            karatsuba_limit,
        );

        for i in (ncorrect + 1)..=ncorrect_new {
            e_digits[ndigs_e - i] = ((etmp[nn - i] << 2) & mask) | (etmp[nn - 1 - i] >> (s - 2));
        }

        ncorrect = ncorrect_new;
    }

    // Shift e_digits from left-aligned back to properly right-aligned.
    let shift = (s - 1) - (nbits_e - 1) % s;
    for i in 0..ndigs_e - 1 {
        e_digits[i] = (e_digits[i] >> shift) | ((e_digits[i + 1] << (s - shift)) & mask);
    }
    e_digits[ndigs_e - 1] >>= shift;
}

//! Euclidean division (spec §4.7): long division driven by a Newton-iterated
//! reciprocal, peeling off one quotient digit-block per iteration, with a
//! plain bitwise fallback for small denominators.
//!
//! Ported from `pygf2x_divmod` and `div_bitwise` in
//! `examples/original_source/c_ext/{pygf2x.c, div_bitwise.h}`.

use crate::core::inverse;
use crate::core::karatsuba;
use crate::core::primitives::{self, PrimitiveBackend};
use crate::core::{bits, bits::nbits};
use crate::radix::{Digit, Radix};

/// A very simple bitwise Euclidean division: one bit of quotient at a time.
/// `q_digits` must already be zeroed; `r_digits` holds the numerator on
/// entry and the remainder on return.
fn div_bitwise(q_digits: &mut [Digit], r_digits: &mut [Digit], d_digits: &[Digit], nbits_n: u32, nbits_d: u32, radix: Radix) {
    let s = radix.bits() as i64;
    let mut ib_r = nbits_n as i64 - 1;
    while ib_r >= nbits_d as i64 - 1 {
        let id_r = (ib_r / s) as usize;
        let ibd_r = (ib_r - id_r as i64 * s) as u32;
        if r_digits[id_r] & (1 << ibd_r) != 0 {
            let ib_q = ib_r - nbits_d as i64 + 1;
            let id_q = (ib_q / s) as usize;
            let ibd_q = (ib_q % s) as u32;
            q_digits[id_q] |= 1 << ibd_q;

            let mut ib_d = nbits_d as i64 - 1;
            while ib_d >= 0 {
                let id_d = (ib_d / s) as usize;
                let ibd_d = (ib_d % s) as u32;
                let ib_dr = ib_r - ((nbits_d as i64 - 1) - ib_d);
                let id_dr = (ib_dr / s) as usize;
                let ibd_dr = (ib_dr % s) as u32;
                r_digits[id_dr] ^= ((d_digits[id_d] >> ibd_d) & 1) << ibd_dr;
                ib_d -= 1;
            }
        }
        ib_r -= 1;
    }
}

fn at(slice: &[Digit], idx: isize) -> Digit {
    if idx < 0 {
        0
    } else {
        slice.get(idx as usize).copied().unwrap_or(0)
    }
}

/// Newton-block long division, used once the denominator is wide enough that
/// bitwise division would be too slow. `q` and `r` are the full-size
/// quotient/remainder buffers from [`divmod`]; `nbits_r` is the current
/// remainder's significant bit count and shrinks every iteration.
#[allow(clippy::too_many_arguments)]
fn newton_block_divmod(
    q: &mut [Digit],
    r: &mut [Digit],
    d_digits: &[Digit],
    nbits_d: u32,
    nbits_q: u32,
    mut nbits_r: u32,
    radix: Radix,
    backend: PrimitiveBackend,
    parallel_threshold: usize,
    karatsuba_limit: usize,
) {
    let s = radix.bits();
    let mask = radix.mask();
    let ndigs_d = radix.ndigits_for_bits(nbits_d);

    let nbits_e_requested = nbits_q.min(nbits_d);
    let ndigs_e = radix.ndigits_for_bits(nbits_e_requested);
    let nbits_e = s * ndigs_e as u32;

    let mut e = vec![0 as Digit; ndigs_e];
    inverse::inverse(&mut e, ndigs_e, nbits_e, d_digits, nbits_d, radix, backend, parallel_threshold, karatsuba_limit);

    let mut dr = vec![0 as Digit; ndigs_e + ndigs_d];

    if nbits_q % s != 0 {
        let nbits_ei = nbits_q % s;
        let nbits_ri = (nbits_r - 1) % s + 1;
        let ndigs_r_full = r.len();
        let ri: Digit = if nbits_ri > nbits_ei {
            r[ndigs_r_full - 1] >> (nbits_ri - nbits_ei)
        } else {
            (at(r, ndigs_r_full as isize - 2) >> (s - (nbits_ei - nbits_ri)))
                | (r[ndigs_r_full - 1] << (nbits_ei - nbits_ri))
        };
        let ei = e[ndigs_e - 1] >> (s - nbits_ei);

        let dq = (primitives::mul_digit(backend, radix, ei, ri) >> (nbits_ei - 1)) as Digit;

        let nbits_qi = nbits_r - nbits_d - (nbits_ei - 1);
        debug_assert_eq!(nbits_qi % s, 0);
        let ndigs_qi = (nbits_qi / s) as usize;

        for x in dr.iter_mut().take(ndigs_d + 1) {
            *x = 0;
        }
        karatsuba::mul(&mut dr[..ndigs_d + 1], &[dq], d_digits, radix, backend, parallel_threshold, karatsuba_limit);

        for i in ndigs_qi..ndigs_r_full {
            r[i] ^= dr[i - ndigs_qi];
        }
        *q.last_mut().expect("quotient has at least one digit when nbits_q is not digit-aligned") = dq;

        nbits_r -= nbits_ei;
    }

    debug_assert_eq!(nbits_e % s, 0);

    let mut dq = vec![0 as Digit; ndigs_e << 1];
    while nbits_r >= nbits_d {
        let ndigs_ei = ndigs_e.min(((nbits_r - nbits_d + 1) / s) as usize);
        let nbits_ei = ndigs_ei as u32 * s;

        for x in dq.iter_mut().take(2 * ndigs_ei) {
            *x = 0;
        }
        let ndigs_ri = radix.ndigits_for_bits(nbits_r);
        let nbits_ri = (nbits_r - 1) % s + 1;

        let mut r_top = vec![0 as Digit; ndigs_ei];
        for (i, slot) in r_top.iter_mut().enumerate() {
            let base = ndigs_ri as isize - ndigs_ei as isize + i as isize;
            *slot = ((at(r, base) << (s - nbits_ri)) & mask) | (at(r, base - 1) >> nbits_ri);
        }
        karatsuba::mul(
            &mut dq[..2 * ndigs_ei],
            &e[ndigs_e - ndigs_ei..ndigs_e],
            &r_top,
            radix,
            backend,
            parallel_threshold,
            karatsuba_limit,
        );
        bits::rshift(&mut dq[..2 * ndigs_ei], radix, nbits_ei - 1);

        let ndigs_qi = ((nbits_r - nbits_d - (nbits_ei - 1)) / s) as usize;

        let dr_len = ndigs_ei + ndigs_d;
        for x in dr.iter_mut().take(dr_len) {
            *x = 0;
        }
        karatsuba::mul(&mut dr[..dr_len], &dq[..ndigs_ei], d_digits, radix, backend, parallel_threshold, karatsuba_limit);

        for i in ndigs_qi..ndigs_ri {
            if dr[i - ndigs_qi] != 0 {
                r[i] ^= dr[i - ndigs_qi];
            }
        }
        for i in 0..ndigs_ei {
            if dq[i] != 0 {
                q[ndigs_qi + i] ^= dq[i];
            }
        }

        nbits_r -= nbits_ei;
    }
}

/// Divide `u` by `d` as GF(2)[x] polynomials, returning `(quotient,
/// remainder)` with the remainder trimmed of leading zero digits.
/// `bitwise_div_limit` picks the cutover point below which [`div_bitwise`] is
/// used instead of the reciprocal-driven block algorithm.
#[allow(clippy::too_many_arguments)]
pub fn divmod(
    u_digits: &[Digit],
    nbits_u: u32,
    d_digits: &[Digit],
    nbits_d: u32,
    radix: Radix,
    backend: PrimitiveBackend,
    parallel_threshold: usize,
    bitwise_div_limit: u32,
    karatsuba_limit: usize,
) -> (Vec<Digit>, Vec<Digit>) {
    debug_assert!(nbits_d > 0);
    debug_assert_eq!(nbits(u_digits, radix), nbits_u);
    debug_assert_eq!(nbits(d_digits, radix), nbits_d);

    let ndigs_d = radix.ndigits_for_bits(nbits_d);
    let ndigs_u = radix.ndigits_for_bits(nbits_u);

    let nbits_q = if nbits_u > nbits_d - 1 { nbits_u - (nbits_d - 1) } else { 0 };
    let nbits_r_initial = if nbits_u > nbits_d - 1 { nbits_u } else { nbits_d - 1 };
    let ndigs_q = radix.ndigits_for_bits(nbits_q);
    let mut ndigs_r = radix.ndigits_for_bits(nbits_r_initial);

    let mut q = vec![0 as Digit; ndigs_q];
    let mut r = vec![0 as Digit; ndigs_r];
    r[..ndigs_u].copy_from_slice(&u_digits[..ndigs_u]);

    if nbits_u == nbits_d {
        q[0] = 1;
        for i in 0..ndigs_d {
            r[i] ^= d_digits[i];
        }
    } else if nbits_d == 1 {
        for i in 0..ndigs_u {
            q[i] = r[i];
        }
        for x in r.iter_mut() {
            *x = 0;
        }
    } else if nbits_u >= nbits_d {
        if nbits_d < bitwise_div_limit {
            div_bitwise(&mut q, &mut r, d_digits, nbits_u, nbits_d, radix);
        } else {
            newton_block_divmod(
                &mut q,
                &mut r,
                d_digits,
                nbits_d,
                nbits_q,
                nbits_r_initial,
                radix,
                backend,
                parallel_threshold,
                karatsuba_limit,
            );
        }
    }

    while ndigs_r > 0 && r[ndigs_r - 1] == 0 {
        ndigs_r -= 1;
    }
    r.truncate(ndigs_r);

    (q, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_round_trip(u: &[Digit], d: &[Digit], radix: Radix, bitwise_div_limit: u32) {
        let backend = PrimitiveBackend::Table;
        let limit = crate::core::schoolbook::karatsuba_limit(backend);
        let nbits_u = nbits(u, radix);
        let nbits_d = nbits(d, radix);
        let (q, r) = divmod(u, nbits_u, d, nbits_d, radix, backend, usize::MAX, bitwise_div_limit, limit);

        if !r.is_empty() {
            assert!(nbits(&r, radix) < nbits_d);
        }

        let mut qd = vec![0u32; q.len() + d.len()];
        karatsuba::mul(&mut qd, &q, d, radix, backend, usize::MAX, limit);
        for (i, &rd) in r.iter().enumerate() {
            qd[i] ^= rd;
        }

        let mut expected = u.to_vec();
        expected.resize(qd.len(), 0);
        assert_eq!(qd, expected, "q*d + r must reconstruct u");
    }

    #[test]
    fn bitwise_path_round_trip() {
        let radix = Radix::Bits15;
        let d = [0b101u32]; // x^2+1
        let u = [0b1111u32];
        check_round_trip(&u, &d, radix, 64);
    }

    #[test]
    fn newton_path_large_operands() {
        let radix = Radix::Bits15;
        let d: Vec<Digit> = (0..6).map(|i| (i * 131 + 7) as u32 & 0x7fff | 0x4000).collect();
        let u: Vec<Digit> = (0..40).map(|i| (i * 97 + 3) as u32 & 0x7fff).collect();
        check_round_trip(&u, &d, radix, 1);
    }

    #[test]
    fn denominator_one_is_identity() {
        let radix = Radix::Bits15;
        let backend = PrimitiveBackend::Table;
        let limit = crate::core::schoolbook::karatsuba_limit(backend);
        let u = [0x1234u32, 0x5a5a];
        let d = [1u32];
        let (q, r) = divmod(&u, nbits(&u, radix), &d, 1, radix, backend, usize::MAX, 64, limit);
        assert_eq!(q, u.to_vec());
        assert!(r.is_empty());
    }

    #[test]
    fn equal_bit_length_gives_quotient_one() {
        let radix = Radix::Bits15;
        let backend = PrimitiveBackend::Table;
        let limit = crate::core::schoolbook::karatsuba_limit(backend);
        let d = [0x5a5au32];
        let u = [0x5a5au32];
        let (q, r) = divmod(&u, nbits(&u, radix), &d, nbits(&d, radix), radix, backend, usize::MAX, 64, limit);
        assert_eq!(q, vec![1]);
        assert!(r.is_empty());
    }

    #[test]
    fn smaller_numerator_gives_zero_quotient() {
        let radix = Radix::Bits15;
        let backend = PrimitiveBackend::Table;
        let limit = crate::core::schoolbook::karatsuba_limit(backend);
        let d = [0x7fffu32, 1];
        let u = [0x1234u32];
        let (q, r) = divmod(&u, nbits(&u, radix), &d, nbits(&d, radix), radix, backend, usize::MAX, 64, limit);
        assert!(q.iter().all(|&x| x == 0));
        assert_eq!(r, u.to_vec());
    }
}

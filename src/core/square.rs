//! Squaring (spec §4.3): `f^2` is computed digit-by-digit by bit-spreading,
//! since cross terms cancel in GF(2) — `(Σ f_i x^i)^2 = Σ f_i x^(2i)`.
//!
//! Ported from `square_n` in `examples/original_source/c_ext/generic.h`.

use crate::core::primitives::{self, PrimitiveBackend};
use crate::radix::{Digit, Radix};

/// Writes `f^2` into `result[0..2*f.len())`.
pub fn square_n(result: &mut [Digit], f: &[Digit], radix: Radix, backend: PrimitiveBackend) {
    debug_assert!(result.len() >= 2 * f.len());
    match radix {
        Radix::Bits15 => square_n_15(result, f, backend),
        Radix::Bits30 => square_n_30(result, f, backend),
    }
}

fn square_n_15(result: &mut [Digit], f: &[Digit], backend: PrimitiveBackend) {
    for (i, &fd) in f.iter().enumerate() {
        // fd is a 15-bit digit; sqr_15 spreads it into a 29-bit value whose
        // low 15 bits and next 14 bits are the two output digits.
        let sq = primitives::sqr_15(backend, fd as u16);
        result[2 * i] = sq & Radix::Bits15.mask();
        result[2 * i + 1] = sq >> 15;
    }
}

fn square_n_30(result: &mut [Digit], f: &[Digit], backend: PrimitiveBackend) {
    for (i, &fd) in f.iter().enumerate() {
        // fd = lo + hi*x^15, and (a+b)^2 = a^2 + b^2 over GF(2), so the two
        // 15-bit halves square independently with no cross term: sqr(lo)
        // lands entirely in digit 2i (at most 29 bits), sqr(hi) entirely in
        // digit 2i+1 (representing the x^30 coefficient onward).
        let lo = primitives::sqr_15(backend, (fd & 0x7fff) as u16);
        let hi = primitives::sqr_15(backend, (fd >> 15) as u16);
        result[2 * i] = lo;
        result[2 * i + 1] = hi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::karatsuba::mul;

    fn naive_square(f: &[Digit], radix: Radix, backend: PrimitiveBackend) -> Vec<Digit> {
        let mut out = vec![0u32; f.len() * 2];
        mul(&mut out, f, f, radix, backend, 8, crate::core::schoolbook::karatsuba_limit(backend));
        out
    }

    #[test]
    fn square_matches_self_multiply_15() {
        let backend = PrimitiveBackend::Table;
        let radix = Radix::Bits15;
        let f = [0x1234u32, 0x5a5a, 0x7fff];
        let mut result = vec![0u32; 2 * f.len()];
        square_n(&mut result, &f, radix, backend);
        assert_eq!(result, naive_square(&f, radix, backend));
    }

    #[test]
    fn square_matches_self_multiply_30() {
        let backend = PrimitiveBackend::Table;
        let radix = Radix::Bits30;
        let f = [0x1234_5678u32, 0x3fff_ffff];
        let mut result = vec![0u32; 2 * f.len()];
        square_n(&mut result, &f, radix, backend);
        assert_eq!(result, naive_square(&f, radix, backend));
    }

    #[test]
    fn square_odd_bits_are_zero() {
        let backend = PrimitiveBackend::Table;
        let radix = Radix::Bits15;
        let f = [0x7fffu32];
        let mut result = vec![0u32; 2];
        square_n(&mut result, &f, radix, backend);
        let bits = crate::core::bits::nbits(&result, radix);
        let mut bit = 0u32;
        let mut seen_any = false;
        while bit < bits {
            let id = (bit / 15) as usize;
            let ib = bit % 15;
            if (result[id] >> ib) & 1 != 0 {
                seen_any = true;
                assert_eq!(bit % 2, 0, "bit {bit} set in a square");
            }
            bit += 1;
        }
        assert!(seen_any);
    }
}

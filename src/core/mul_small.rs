//! Digit-by-polynomial multiply (spec §4.2): XORs `l * r` into `p`, where
//! `l` is a single digit (or smaller) and `r` is an `n`-digit polynomial.
//!
//! Dispatches by the bit-width bucket of `l`, exactly as the original
//! `mul_ATOM_nr` / `mul_15_nr` / `mul_digit_nr` trio in
//! `examples/original_source/c_ext/pygf2x.c`'s `mul_nl_nr`.

use crate::core::primitives::{self, PrimitiveBackend};
use crate::radix::{Digit, DoubleDigit, Radix};

/// `p[0..n+1) ^= l * r[0..n)`. `l` must be `<= radix.mask()`.
pub fn mul_small_nr(
    p: &mut [Digit],
    l: Digit,
    r: &[Digit],
    radix: Radix,
    backend: PrimitiveBackend,
) {
    let n = r.len();
    debug_assert!(p.len() >= n + 1);
    debug_assert!(l <= radix.mask());

    if l <= 0xff {
        mul_8_nr(p, l as u8, r, radix, backend);
    } else if radix == Radix::Bits30 && l < 1 << 15 {
        mul_15_nr(p, l as u16, r, radix, backend);
    } else {
        mul_digit_nr(p, l, r, radix, backend);
    }
}

fn mul_8_nr(p: &mut [Digit], l: u8, r: &[Digit], radix: Radix, backend: PrimitiveBackend) {
    let mut acc: DoubleDigit = 0;
    let mask = radix.mask();
    let s = radix.bits();
    for (i, &rd) in r.iter().enumerate() {
        acc ^= match radix {
            Radix::Bits15 => primitives::mul_8_15(backend, l, rd as u16) as DoubleDigit,
            Radix::Bits30 => primitives::mul_8_30(backend, l, rd),
        };
        p[i] ^= (acc as Digit) & mask;
        acc >>= s;
    }
    p[r.len()] ^= acc as Digit;
}

fn mul_15_nr(p: &mut [Digit], l: u16, r: &[Digit], radix: Radix, backend: PrimitiveBackend) {
    debug_assert_eq!(radix, Radix::Bits30);
    let mut acc: DoubleDigit = 0;
    for (i, &rd) in r.iter().enumerate() {
        acc ^= primitives::mul_15_30(backend, l, rd);
        p[i] ^= (acc as Digit) & radix.mask();
        acc >>= radix.bits();
    }
    p[r.len()] ^= acc as Digit;
}

fn mul_digit_nr(p: &mut [Digit], l: Digit, r: &[Digit], radix: Radix, backend: PrimitiveBackend) {
    let mut acc: DoubleDigit = 0;
    let mask = radix.mask();
    let s = radix.bits();
    for (i, &rd) in r.iter().enumerate() {
        acc ^= primitives::mul_digit(backend, radix, l, rd);
        p[i] ^= (acc as Digit) & mask;
        acc >>= s;
    }
    p[r.len()] ^= acc as Digit;
}

//! Table-driven small-operand backend: a 32×32 product table over 5-bit
//! slices plus a 256-entry 8-bit square table, composed up to the full
//! contract by the digit-splitting recurrence used by the original engine
//! (`examples/original_source/c_ext/generic.h`: `mul_5_15`, `mul_15_15`,
//! `mul_5_30`, `mul_15_30`, `mul_30_30`, `sqr_15`).

use std::sync::OnceLock;

use super::clmul_bits;

struct Tables {
    mul5: [[u16; 32]; 32],
    sqr8: [u16; 256],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut mul5 = [[0u16; 32]; 32];
        for (a, row) in mul5.iter_mut().enumerate() {
            for (b, entry) in row.iter_mut().enumerate() {
                *entry = clmul_bits(a as u64, b as u64, 5) as u16;
            }
        }
        let mut sqr8 = [0u16; 256];
        for (a, entry) in sqr8.iter_mut().enumerate() {
            *entry = clmul_bits(a as u64, a as u64, 8) as u16;
        }
        Tables { mul5, sqr8 }
    })
}

#[inline]
fn mul_5_5(l: u8, r: u8) -> u16 {
    tables().mul5[l as usize & 0x1f][r as usize & 0x1f]
}

#[inline]
fn sqr_8(f: u8) -> u16 {
    tables().sqr8[f as usize]
}

/// Multiply a 5-bit with a 15-bit polynomial; result at most 19 bits.
fn mul_5_15(l: u8, r: u16) -> u32 {
    let r0 = (r & 0x1f) as u8;
    let r1 = ((r >> 5) & 0x1f) as u8;
    let r2 = ((r >> 10) & 0x1f) as u8;

    let mut p = mul_5_5(l, r2) as u32;
    p <<= 5;
    p ^= mul_5_5(l, r1) as u32;
    p <<= 5;
    p ^= mul_5_5(l, r0) as u32;
    p
}

pub fn mul_15_15(l: u16, r: u16) -> u32 {
    let l0 = (l & 0x1f) as u8;
    let l1 = ((l >> 5) & 0x1f) as u8;
    let l2 = ((l >> 10) & 0x1f) as u8;
    let r0 = (r & 0x1f) as u8;
    let r1 = ((r >> 5) & 0x1f) as u8;
    let r2 = ((r >> 10) & 0x1f) as u8;

    let mut p = mul_5_5(l2, r2) as u32;
    p <<= 5;
    p ^= (mul_5_5(l1, r2) ^ mul_5_5(l2, r1)) as u32;
    p <<= 5;
    p ^= (mul_5_5(l0, r2) ^ mul_5_5(l1, r1) ^ mul_5_5(l2, r0)) as u32;
    p <<= 5;
    p ^= (mul_5_5(l0, r1) ^ mul_5_5(l1, r0)) as u32;
    p <<= 5;
    p ^= mul_5_5(l0, r0) as u32;
    p
}

/// Multiply a 5-bit with a 30-bit polynomial; result at most 34 bits.
fn mul_5_30(l: u8, r: u32) -> u64 {
    let mut chunks = [0u8; 6];
    let mut rr = r;
    for c in chunks.iter_mut() {
        *c = (rr & 0x1f) as u8;
        rr >>= 5;
    }
    let mut p = 0u64;
    for &c in chunks.iter().rev() {
        p <<= 5;
        p ^= mul_5_5(l, c) as u64;
    }
    p
}

/// Multiply an 8-bit with a 15-bit polynomial via two 5-bit-bucketed calls
/// (8 = 5 + 3, and a 3-bit value is just a smaller 5-bit one).
pub fn mul_8_15(l: u8, r: u16) -> u32 {
    let lo = l & 0x1f;
    let hi = (l >> 5) & 0x07;
    mul_5_15(lo, r) ^ (mul_5_15(hi, r) << 5)
}

pub fn mul_8_30(l: u8, r: u32) -> u64 {
    let lo = l & 0x1f;
    let hi = (l >> 5) & 0x07;
    mul_5_30(lo, r) ^ (mul_5_30(hi, r) << 5)
}

pub fn mul_15_30(l: u16, r: u32) -> u64 {
    let l0 = (l & 0x1f) as u8;
    let l1 = ((l >> 5) & 0x1f) as u8;
    let l2 = ((l >> 10) & 0x1f) as u8;

    mul_5_30(l0, r) ^ (mul_5_30(l1, r) << 5) ^ (mul_5_30(l2, r) << 10)
}

pub fn mul_30_30(l: u32, r: u32) -> u64 {
    // Karatsuba over two 15-bit halves, matching generic.h's mul_30_30.
    let ll = (l & 0x7fff) as u16;
    let lh = (l >> 15) as u16;
    let rl = (r & 0x7fff) as u16;
    let rh = (r >> 15) as u16;

    let z0 = mul_15_15(ll, rl) as u64;
    let z2 = mul_15_15(lh, rh) as u64;
    let z1 = mul_15_15(ll ^ lh, rl ^ rh) as u64 ^ z2 ^ z0;

    (((z2 << 15) ^ z1) << 15) ^ z0
}

pub fn sqr_15(f: u16) -> u32 {
    ((sqr_8((f >> 8) as u8) as u32) << 16) ^ sqr_8(f as u8) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul5_5_matches_reference() {
        for a in 0u8..32 {
            for b in 0u8..32 {
                assert_eq!(mul_5_5(a, b) as u64, clmul_bits(a as u64, b as u64, 5));
            }
        }
    }

    #[test]
    fn sqr8_is_bit_spread() {
        // squaring in GF(2)[x] spreads bits into even positions only
        for f in 0u8..=255 {
            let s = sqr_8(f);
            for bit in 0..8 {
                let expected = (f >> bit) & 1;
                let got = (s >> (2 * bit)) & 1;
                assert_eq!(got as u8, expected, "bit {bit} of sqr_8({f:#x})");
            }
        }
    }

    #[test]
    fn mul_30_30_against_clmul_bits() {
        let pairs = [(0x3fff_ffffu32, 0x3fff_ffffu32), (0x1234_5678, 0x0abc_def0), (1, 1)];
        for (l, r) in pairs {
            assert_eq!(mul_30_30(l, r), clmul_bits(l as u64, r as u64, 30) as u64);
        }
    }
}

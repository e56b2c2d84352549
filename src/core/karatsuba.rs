//! Recursive multiply (spec §4.5): either operand of length 1 dispatches
//! straight to [`mul_small_nr`] (spec §4.2); otherwise unbalanced-operand
//! chunking plus the classic three-multiply Karatsuba split, bottoming out
//! in [`schoolbook::mul_small_block`] below the caller-tunable
//! `karatsuba_limit` (see [`schoolbook::karatsuba_limit`] for the
//! backend-tuned default that [`crate::config::EngineConfig`] starts from).
//!
//! Ported from `mul_nl_nr` in `examples/original_source/c_ext/mul_nl_nr.h`.

use smallvec::SmallVec;

use crate::core::mul_small::mul_small_nr;
use crate::core::primitives::PrimitiveBackend;
use crate::core::schoolbook::mul_small_block;
use crate::radix::{Digit, Radix};

/// Above this many digits on the shorter operand, the two independent
/// sub-products of a Karatsuba split are run on separate threads via
/// `rayon::join` rather than sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

type Scratch = SmallVec<[Digit; 32]>;

fn zeroed(n: usize) -> Scratch {
    let mut v = Scratch::new();
    v.resize(n, 0);
    v
}

/// `p[0..l.len()+r.len()) ^= l * r`. `p` must already be zeroed by the
/// caller if a fresh product (rather than an accumulation) is wanted.
/// `karatsuba_limit` is the shorter-operand digit count at or below which
/// this falls through to the schoolbook double loop instead of recursing.
#[allow(clippy::too_many_arguments)]
pub fn mul(
    p: &mut [Digit],
    l: &[Digit],
    r: &[Digit],
    radix: Radix,
    backend: PrimitiveBackend,
    parallel_threshold: usize,
    karatsuba_limit: usize,
) {
    let nl = l.len();
    let nr = r.len();
    debug_assert!(p.len() >= nl + nr);

    if nl == 0 || nr == 0 {
        return;
    }

    if nl == 1 {
        mul_small_nr(p, l[0], r, radix, backend);
        return;
    }
    if nr == 1 {
        mul_small_nr(p, r[0], l, radix, backend);
        return;
    }

    if nl.min(nr) <= karatsuba_limit {
        mul_small_block(p, l, nl, r, nr, radix, backend);
        return;
    }

    if nl > 2 * nr {
        mul_unbalanced(p, l, r, radix, backend, parallel_threshold, karatsuba_limit);
        return;
    }
    if nr > 2 * nl {
        mul_unbalanced(p, r, l, radix, backend, parallel_threshold, karatsuba_limit);
        return;
    }

    mul_karatsuba(p, l, r, radix, backend, parallel_threshold, karatsuba_limit);
}

/// `long_op` is more than twice as long as `short_op`: split `long_op` into
/// chunks no longer than `short_op` and accumulate each chunk's product at
/// its digit offset, same as the C original's "a much bigger than b" branch.
#[allow(clippy::too_many_arguments)]
fn mul_unbalanced(
    p: &mut [Digit],
    long_op: &[Digit],
    short_op: &[Digit],
    radix: Radix,
    backend: PrimitiveBackend,
    parallel_threshold: usize,
    karatsuba_limit: usize,
) {
    let chunk_len = short_op.len();
    let mut offset = 0;
    while offset < long_op.len() {
        let end = (offset + chunk_len).min(long_op.len());
        let chunk = &long_op[offset..end];
        let mut partial = zeroed(chunk.len() + short_op.len());
        mul(&mut partial, chunk, short_op, radix, backend, parallel_threshold, karatsuba_limit);
        for (i, &d) in partial.iter().enumerate() {
            p[offset + i] ^= d;
        }
        offset = end;
    }
}

/// Balanced three-multiply Karatsuba split. Split point `m` follows the
/// original's formula so an odd difference in operand length rounds the
/// split up rather than down.
#[allow(clippy::too_many_arguments)]
fn mul_karatsuba(
    p: &mut [Digit],
    l: &[Digit],
    r: &[Digit],
    radix: Radix,
    backend: PrimitiveBackend,
    parallel_threshold: usize,
    karatsuba_limit: usize,
) {
    let nl = l.len();
    let nr = r.len();
    let min_n = nl.min(nr);
    let diff = nl.abs_diff(nr);
    let m = (min_n + (diff & 1)) / 2;

    let (l_lo, l_hi) = l.split_at(m.min(nl));
    let (r_lo, r_hi) = r.split_at(m.min(nr));

    let z0_len = l_lo.len() + r_lo.len();
    let z2_len = l_hi.len() + r_hi.len();

    let mut l_sum = zeroed(l_lo.len().max(l_hi.len()));
    xor_into(&mut l_sum, l_lo);
    xor_into(&mut l_sum, l_hi);
    let mut r_sum = zeroed(r_lo.len().max(r_hi.len()));
    xor_into(&mut r_sum, r_lo);
    xor_into(&mut r_sum, r_hi);

    let run_z0 = || {
        let mut z0 = zeroed(z0_len);
        mul(&mut z0, l_lo, r_lo, radix, backend, parallel_threshold, karatsuba_limit);
        z0
    };
    let run_z2 = || {
        let mut z2 = zeroed(z2_len);
        mul(&mut z2, l_hi, r_hi, radix, backend, parallel_threshold, karatsuba_limit);
        z2
    };

    let (z0, z2) = if min_n >= parallel_threshold {
        rayon::join(run_z0, run_z2)
    } else {
        (run_z0(), run_z2())
    };

    let mid_len = l_sum.len() + r_sum.len();
    let mut mid = zeroed(mid_len);
    mul(&mut mid, &l_sum, &r_sum, radix, backend, parallel_threshold, karatsuba_limit);
    xor_into(&mut mid, &z0);
    xor_into(&mut mid, &z2);

    xor_into_at(p, &z0, 0);
    xor_into_at(p, &mid, m);
    xor_into_at(p, &z2, 2 * m);
}

fn xor_into(dst: &mut [Digit], src: &[Digit]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

fn xor_into_at(dst: &mut [Digit], src: &[Digit], offset: usize) {
    for (i, &s) in src.iter().enumerate() {
        dst[offset + i] ^= s;
    }
}

//! Hardware carry-less multiply backend: `pclmulqdq` on x86_64, `pmull` on
//! aarch64 (ported in spirit from `examples/original_source/c_ext/intel_clmul.h`
//! and `armv8_crypto.h`, and in structure from the teacher's split of
//! architecture-specific SIMD code into its own module behind
//! `#[cfg(target_arch = ...)]`, see `reed_solomon/simd_pshufb.rs` /
//! `simd_neon.rs`).
//!
//! All widths fit comfortably inside one 64×64→128-bit carry-less multiply,
//! so there is no digit-splitting here: operands are zero-extended and the
//! hardware instruction is called directly.

/// Raw 64×64→128-bit carry-less product, `l` and `r` each at most `bits`
/// wide. Dispatches to whichever hardware instruction is available; callers
/// on unsupported targets never reach this backend (see
/// [`super::select_backend`]), but the function still needs to compile
/// everywhere, so it falls back to the portable lane multiply there.
#[inline]
fn clmul64(l: u64, r: u64) -> u128 {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("pclmulqdq") && is_x86_feature_detected!("sse2") {
            // SAFETY: feature support for pclmulqdq+sse2 was just checked.
            return unsafe { x86::clmul64(l, r) };
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("aes") {
            // SAFETY: feature support for the AES/PMULL crypto extension was just checked.
            return unsafe { arm::clmul64(l, r) };
        }
    }
    super::clmul_bits(l, r, 63)
}

#[cfg(target_arch = "x86_64")]
mod x86 {
    use core::arch::x86_64::{__m128i, _mm_clmulepi64_si128, _mm_set_epi64x};

    #[target_feature(enable = "pclmulqdq,sse2")]
    pub(super) unsafe fn clmul64(l: u64, r: u64) -> u128 {
        let li: __m128i = _mm_set_epi64x(0, l as i64);
        let ri: __m128i = _mm_set_epi64x(0, r as i64);
        let product: __m128i = _mm_clmulepi64_si128(li, ri, 0);
        let mut out = [0u64; 2];
        core::arch::x86_64::_mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, product);
        ((out[1] as u128) << 64) | out[0] as u128
    }
}

#[cfg(target_arch = "aarch64")]
mod arm {
    use core::arch::aarch64::{vmull_p64, vreinterpretq_u8_p128};

    #[target_feature(enable = "aes")]
    pub(super) unsafe fn clmul64(l: u64, r: u64) -> u128 {
        let product = vmull_p64(l, r);
        let bytes = vreinterpretq_u8_p128(product);
        let mut out = [0u8; 16];
        core::arch::aarch64::vst1q_u8(out.as_mut_ptr(), bytes);
        u128::from_le_bytes(out)
    }
}

pub fn mul_8_15(l: u8, r: u16) -> u32 {
    clmul64(l as u64, r as u64) as u32
}

pub fn mul_15_15(l: u16, r: u16) -> u32 {
    clmul64(l as u64, r as u64) as u32
}

pub fn mul_8_30(l: u8, r: u32) -> u64 {
    clmul64(l as u64, r as u64) as u64
}

pub fn mul_15_30(l: u16, r: u32) -> u64 {
    clmul64(l as u64, r as u64) as u64
}

pub fn mul_30_30(l: u32, r: u32) -> u64 {
    clmul64(l as u64, r as u64) as u64
}

pub fn sqr_15(f: u16) -> u32 {
    clmul64(f as u64, f as u64) as u32
}

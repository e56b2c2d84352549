//! Engine tunables (spec §6), separate from the plain `Digit`-slice
//! parameters [`crate::core`] takes directly, so callers configure once and
//! reuse the same settings across many operations.

use crate::core::karatsuba::DEFAULT_PARALLEL_THRESHOLD;
use crate::core::primitives::PrimitiveBackend;
use crate::core::schoolbook;
use crate::radix::Radix;

/// Caller-facing configuration for every [`crate::ops`] entry point.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub radix: Radix,
    /// Reject any operand wider than this many bits with
    /// [`crate::error::Gf2xError::OperandTooLarge`].
    pub max_bits: u32,
    /// Override automatic backend detection; `None` probes the CPU once per
    /// call via [`crate::core::primitives::select_backend`].
    pub force_backend: Option<PrimitiveBackend>,
    /// Above this many digits on the shorter Karatsuba operand, independent
    /// sub-products run in parallel via `rayon::join`.
    pub parallel_threshold: usize,
    /// Denominators narrower than this many bits use plain bitwise division.
    pub bitwise_div_limit: u32,
    /// Below this many digits on the shorter Karatsuba operand, multiplication
    /// falls back to the schoolbook double loop instead of recursing. Defaults
    /// to the backend-tuned crossover from
    /// [`crate::core::schoolbook::karatsuba_limit`], but a caller whose
    /// operand sizes don't match that backend's sweet spot can override it.
    pub karatsuba_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let force_backend = None;
        EngineConfig {
            radix: Radix::Bits30,
            max_bits: 1 << 24,
            force_backend,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            bitwise_div_limit: 4,
            karatsuba_limit: schoolbook::karatsuba_limit(crate::core::primitives::select_backend(force_backend)),
        }
    }
}

impl EngineConfig {
    pub fn backend(&self) -> PrimitiveBackend {
        crate::core::primitives::select_backend(self.force_backend)
    }
}

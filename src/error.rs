//! Engine-wide error type (spec §7).

/// Errors the public [`crate::ops`] entry points can return. Internal core
/// routines never produce these directly — they work on pre-validated
/// slices and panic on a caller contract violation instead.
#[derive(Debug, thiserror::Error)]
pub enum Gf2xError {
    #[error("operand has {bits} bits, exceeding max_bits={max_bits}")]
    OperandTooLarge { bits: u32, max_bits: u32 },

    #[error("precision must be in 1..=max_bits, got {precision}")]
    InvalidPrecision { precision: u32 },

    #[error("division by zero")]
    DivisionByZero,
}

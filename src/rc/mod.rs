//! The range coder proper: encoder, decoder, and the adaptive probability
//! cell they share. Everything here operates one bit at a time; callers
//! (the symbol-model layer) decide what each bit means and which cell
//! governs it.

mod decoder;
mod encoder;
mod observe;
mod prob;
mod stream;

pub use decoder::RangeDecoder;
pub use encoder::RangeEncoder;
pub use observe::BitObserver;
#[cfg(feature = "debugging")]
pub use observe::LogObserver;
pub use prob::{Prob, NUM_BIT_MODEL_TOTAL_BITS, NUM_MOVE_BITS, PROB_INIT_VAL};

/// Normalization threshold: `range` is kept at or above this between bit
/// operations so the interval never loses byte-level precision.
pub(crate) const TOP_VALUE: u32 = 1 << 24;

//! Binary range coder for LZMA-family codecs.
//!
//! This crate implements the arithmetic-coding core only: turning single-bit
//! decisions into a compact byte stream and back. Each bit is coded either
//! with a fixed probability of 1/2 ([`RangeEncoder::direct_encode_bit`]) or
//! under an adaptive probability cell ([`Prob`]) owned by the caller.
//!
//! The symbol models that decide *which* bit to code next, the LZ77 window,
//! and any container framing live above this crate and drive it in lock-step
//! on both sides:
//!
//! ```
//! use lzma_rc::{Prob, RangeDecoder, RangeEncoder};
//!
//! let mut buf = Vec::new();
//! let mut enc = RangeEncoder::new(&mut buf);
//! let mut p = Prob::default();
//! enc.encode_bit(1, &mut p).unwrap();
//! enc.encode_bit(0, &mut p).unwrap();
//! enc.flush().unwrap();
//! drop(enc);
//!
//! let mut dec = RangeDecoder::new(&buf[..]).unwrap();
//! let mut p = Prob::default();
//! assert_eq!(dec.decode_bit(&mut p).unwrap(), 1);
//! assert_eq!(dec.decode_bit(&mut p).unwrap(), 0);
//! ```

pub mod errors;
pub mod rc;

pub use crate::errors::{Error, Result};
pub use crate::rc::{BitObserver, Prob, RangeDecoder, RangeEncoder};

use std::fmt;
use std::io::Read;

use super::observe::BitObserver;
use super::prob::Prob;
use super::stream::ByteReader;
use super::TOP_VALUE;
use crate::errors::{Error, Result};

/// Range decoder over an input byte source. Mirrors [`RangeEncoder`]
/// numerically: `code` tracks the position inside the interval, and
/// `code < range` holds after every decode step.
///
/// [`RangeEncoder`]: super::RangeEncoder
pub struct RangeDecoder<R: Read> {
    instream: ByteReader<R>,
    range: u32,
    code: u32,
    bit_counter: u64,
    observer: Option<Box<dyn BitObserver>>,
}

impl<R: Read> RangeDecoder<R> {
    /// Binds a decoder to `input` and runs the init handshake, consuming
    /// the 5 leading bytes of the stream. Fails with
    /// [`Error::StreamCorrupted`] if the first byte is not zero or the
    /// folded `code` is not below `range`.
    pub fn new(input: R) -> Result<RangeDecoder<R>> {
        let mut d = RangeDecoder {
            instream: ByteReader::new(input),
            range: 0xFFFF_FFFF,
            code: 0,
            bit_counter: 0,
            observer: None,
        };
        d.init()?;
        Ok(d)
    }

    /// Attach a per-bit diagnostic observer for this session.
    pub fn set_observer(&mut self, observer: Box<dyn BitObserver>) {
        self.observer = Some(observer);
    }

    fn init(&mut self) -> Result<()> {
        // The encoder's first shift_low always drains an initial cache of
        // zero, so a valid stream starts with 0x00.
        let b = self.instream.read_byte()?;
        if b != 0 {
            return Err(Error::StreamCorrupted("first byte not zero"));
        }

        for _ in 0..4 {
            self.update_code()?;
        }

        if self.code >= self.range {
            return Err(Error::StreamCorrupted("code >= range after init"));
        }
        Ok(())
    }

    /// Decodes one bit with fixed probability 1/2.
    pub fn direct_decode_bit(&mut self) -> Result<u32> {
        self.bit_counter += 1;
        self.range >>= 1;
        self.code = self.code.wrapping_sub(self.range);
        // The top bit of the subtraction says which half `code` was in;
        // adding `range` back keeps `code` below `range` for the 0 case.
        let t = 0u32.wrapping_sub(self.code >> 31);
        self.code = self.code.wrapping_add(self.range & t);
        self.normalize()?;

        let b = t.wrapping_add(1) & 1;
        if let Some(obs) = self.observer.as_mut() {
            obs.direct_bit(self.bit_counter, self.range, b);
        }
        Ok(b)
    }

    /// Decodes one bit under the caller's probability cell, updating the
    /// cell exactly as the encoder did for the same bit.
    pub fn decode_bit(&mut self, p: &mut Prob) -> Result<u32> {
        self.bit_counter += 1;
        let bound = p.bound(self.range);
        let b = if self.code < bound {
            self.range = bound;
            p.inc();
            0
        } else {
            self.code -= bound;
            self.range -= bound;
            p.dec();
            1
        };
        self.normalize()?;

        if let Some(obs) = self.observer.as_mut() {
            obs.model_bit(self.bit_counter, self.range, p.get(), b);
        }
        Ok(b)
    }

    /// Whether the decoder may have consumed the whole stream. `code == 0`
    /// is necessary but not sufficient; callers need an out-of-band end
    /// signal (an end marker or a known size) and must not rely on this
    /// alone.
    pub fn possibly_at_end(&self) -> bool {
        self.code == 0
    }

    fn update_code(&mut self) -> Result<()> {
        let b = self.instream.read_byte()?;
        self.code = (self.code << 8) | u32::from(b);
        Ok(())
    }

    fn normalize(&mut self) -> Result<()> {
        if self.range < TOP_VALUE {
            self.range <<= 8;
            // code < range is maintained by the shift on both sides
            self.update_code()?;
        }
        Ok(())
    }
}

impl<R: Read> fmt::Debug for RangeDecoder<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RangeDecoder {{ range: {:#010x}, code: {:#010x}, bit_counter: {} }}",
            self.range, self.code, self.bit_counter
        )
    }
}

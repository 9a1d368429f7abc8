use std::fmt;
use std::io::Write;

use super::observe::BitObserver;
use super::prob::Prob;
use super::stream::ByteWriter;
use super::TOP_VALUE;
use crate::errors::{Error, Result};

/// Range encoder over an output byte sink.
///
/// `low` is held in a `u64` so an addition that overflows 32 bits is
/// visible as a set bit 32; that bit is the carry that `shift_low` must
/// ripple into bytes already waiting in the cache. `cache` plus
/// `cache_size` defer those bytes: one concrete byte and a count of
/// pending `0xff` bytes whose final value is still undetermined.
pub struct RangeEncoder<W: Write> {
    outstream: ByteWriter<W>,
    range: u32,
    low: u64,
    cache: u8,
    cache_size: i64,
    bit_counter: u64,
    observer: Option<Box<dyn BitObserver>>,
}

impl<W: Write> RangeEncoder<W> {
    pub fn new(out: W) -> RangeEncoder<W> {
        RangeEncoder {
            outstream: ByteWriter::new(out),
            range: 0xFFFF_FFFF,
            low: 0,
            cache: 0,
            cache_size: 1,
            bit_counter: 0,
            observer: None,
        }
    }

    /// Attach a per-bit diagnostic observer for this session.
    pub fn set_observer(&mut self, observer: Box<dyn BitObserver>) {
        self.observer = Some(observer);
    }

    /// Encodes the least-significant bit of `b` with fixed probability 1/2.
    /// No adaptive state is touched.
    pub fn direct_encode_bit(&mut self, b: u32) -> Result<()> {
        self.bit_counter += 1;
        self.range >>= 1;
        self.low += u64::from(self.range) & 0u64.wrapping_sub(u64::from(b & 1));
        self.normalize()?;

        if let Some(obs) = self.observer.as_mut() {
            obs.direct_bit(self.bit_counter, self.range, b & 1);
        }
        Ok(())
    }

    /// Encodes the least-significant bit of `b` under the caller's
    /// probability cell, updating the cell to reflect the bit.
    pub fn encode_bit(&mut self, b: u32, p: &mut Prob) -> Result<()> {
        self.bit_counter += 1;
        let bound = p.bound(self.range);
        if b & 1 == 0 {
            self.range = bound;
            p.inc();
        } else {
            self.low += u64::from(bound);
            self.range -= bound;
            p.dec();
        }
        self.normalize()?;

        if let Some(obs) = self.observer.as_mut() {
            obs.model_bit(self.bit_counter, self.range, p.get(), b & 1);
        }
        Ok(())
    }

    /// Drains all deferred state (the coder carries at most 5 bytes of
    /// latency) and flushes the sink. Call exactly once, at end of session;
    /// the encoder must not be used afterwards.
    pub fn flush(&mut self) -> Result<()> {
        for _ in 0..5 {
            self.shift_low()?;
        }
        self.outstream.flush()
    }

    /// Keeps `range` above the precision threshold, emitting one byte of
    /// `low` whenever it rescales.
    fn normalize(&mut self) -> Result<()> {
        if self.range >= TOP_VALUE {
            return Ok(());
        }
        self.range <<= 8;
        self.shift_low()
    }

    /// Shifts one byte out of `low`, resolving carries.
    ///
    /// A top byte of `0xff` is indeterminate: a later carry would turn it
    /// (and the whole run of `0xff` bytes behind it) into `0x00` with a +1
    /// ripple into the byte before the run. So `0xff` bytes are only
    /// counted, not written, until either a carry arrives or a non-`0xff`
    /// byte closes the run.
    fn shift_low(&mut self) -> Result<()> {
        if (self.low as u32) < 0xff00_0000 || (self.low >> 32) != 0 {
            let carry = (self.low >> 32) as u8;
            let mut tmp = self.cache;
            loop {
                self.outstream.write_byte(tmp.wrapping_add(carry))?;
                tmp = 0xff;
                self.cache_size -= 1;
                if self.cache_size <= 0 {
                    if self.cache_size < 0 {
                        return Err(Error::InternalFault("negative cache size"));
                    }
                    break;
                }
            }
            self.cache = ((self.low as u32) >> 24) as u8;
        }
        self.cache_size += 1;
        self.low = u64::from((self.low as u32) << 8);
        Ok(())
    }
}

impl<W: Write> fmt::Debug for RangeEncoder<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RangeEncoder {{ range: {:#010x}, low: {:#011x}, cache: {:#04x}, cache_size: {}, bit_counter: {} }}",
            self.range, self.low, self.cache, self.cache_size, self.bit_counter
        )
    }
}

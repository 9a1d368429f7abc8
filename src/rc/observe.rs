/// Per-bit diagnostic hook. An observer is attached to one session and sees
/// every coded bit with its sequence number and the coder state after
/// normalization. It is a side channel only: observers must not influence
/// what gets coded.
pub trait BitObserver {
    /// A fixed-probability bit finished coding.
    fn direct_bit(&mut self, n: u64, range: u32, bit: u32);

    /// An adaptive bit finished coding. `prob` is the cell value after its
    /// update.
    fn model_bit(&mut self, n: u64, range: u32, prob: u16, bit: u32);
}

/// Observer that traces every bit through the `log` crate, in the same
/// shape on the encode and decode side so the two transcripts can be
/// diffed when they diverge.
#[cfg(feature = "debugging")]
#[derive(Debug, Default)]
pub struct LogObserver;

#[cfg(feature = "debugging")]
impl LogObserver {
    /// Installs the `env_logger` backend so the trace lines have somewhere
    /// to go. Later calls are no-ops, so every session can call this.
    pub fn init_logging() {
        let _ = env_logger::try_init();
    }
}

#[cfg(feature = "debugging")]
impl BitObserver for LogObserver {
    fn direct_bit(&mut self, n: u64, range: u32, bit: u32) {
        log::trace!("D {:3} 0x{:08x} {}", n, range, bit);
    }

    fn model_bit(&mut self, n: u64, range: u32, prob: u16, bit: u32) {
        log::trace!("B {:3} 0x{:08x} 0x{:03x} {}", n, range, prob, bit);
    }
}

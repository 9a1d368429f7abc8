pub const NUM_BIT_MODEL_TOTAL_BITS: u32 = 11;
pub const NUM_MOVE_BITS: u32 = 5;
pub const PROB_INIT_VAL: u16 = (1 << NUM_BIT_MODEL_TOTAL_BITS) / 2;

const BIT_MODEL_TOTAL: u16 = 1 << NUM_BIT_MODEL_TOTAL_BITS;

/// Adaptive estimate of how likely the next bit in one decision context is
/// to be 0, as a value in `(0, 2048)`. The caller allocates one cell per
/// context (literal bit position, length slot, ...) and threads it into
/// every encode/decode call for that context; the coder only reads it and
/// nudges it.
///
/// Encoder and decoder must apply the same updates in the same order or
/// their streams diverge irrecoverably, which is why the update rules live
/// here and nowhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prob(u16);

impl Prob {
    pub fn new(val: u16) -> Prob {
        Prob(val)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Width of the sub-interval of `range` allocated to a 0-bit under the
    /// current estimate.
    pub fn bound(self, range: u32) -> u32 {
        (range >> NUM_BIT_MODEL_TOTAL_BITS) * u32::from(self.0)
    }

    /// Shift the estimate toward "0 is likely". Applied after a 0-bit.
    pub fn inc(&mut self) {
        self.0 += (BIT_MODEL_TOTAL - self.0) >> NUM_MOVE_BITS;
    }

    /// Shift the estimate toward "1 is likely". Applied after a 1-bit.
    pub fn dec(&mut self) {
        self.0 -= self.0 >> NUM_MOVE_BITS;
    }
}

impl Default for Prob {
    /// The canonical initial value: no bias either way.
    fn default() -> Prob {
        Prob(PROB_INIT_VAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_splits_range_by_estimate() {
        let p = Prob::default();
        // An unbiased cell claims half of the (truncated) range.
        assert_eq!(p.bound(0xFFFF_FFFF), 0x7FFF_FC00);
        assert_eq!(p.bound(1 << 24), 1 << 23);
    }

    #[test]
    fn inc_saturates_below_total() {
        let mut p = Prob::default();
        for _ in 0..10_000 {
            p.inc();
            assert!(p.get() < BIT_MODEL_TOTAL);
        }
        // Converged: the step size has shrunk to zero short of the top.
        assert!(p.get() > BIT_MODEL_TOTAL - (1 << NUM_MOVE_BITS));
    }

    #[test]
    fn dec_saturates_above_zero() {
        let mut p = Prob::default();
        for _ in 0..10_000 {
            p.dec();
            assert!(p.get() > 0);
        }
        assert!(p.get() < 1 << NUM_MOVE_BITS);
    }

    #[test]
    fn updates_converge_from_extremes() {
        let mut p = Prob::new(1);
        for _ in 0..1_000 {
            p.inc();
        }
        assert!(p.get() > BIT_MODEL_TOTAL - (1 << NUM_MOVE_BITS));

        let mut p = Prob::new(BIT_MODEL_TOTAL - 1);
        for _ in 0..1_000 {
            p.dec();
        }
        assert!(p.get() > 0 && p.get() < 1 << NUM_MOVE_BITS);
    }
}

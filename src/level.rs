use bitflags::bitflags;

bitflags! {
    /// Severity mask selecting which categories of message a tracer emits.
    ///
    /// Levels are independent subscription bits, not an ordered threshold: a
    /// tracer built with `Level::TRACE | Level::ERROR` emits those two
    /// categories and nothing else. A message at severity `S` passes the gate
    /// iff the subscribed mask intersects `S`.
    ///
    /// Bit values are stable; masks persisted numerically keep their meaning
    /// across versions. Bits outside the five named flags are representable
    /// (via [`Level::from_bits_retain`]) and simply never match a known
    /// category.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Level: u32 {
        /// Very fine-grained informational events.
        const TRACE = 1 << 0;
        /// Progress messages at a coarse-grained level.
        const INFO = 1 << 1;
        /// Fine-grained events most useful while debugging.
        const DEBUG = 1 << 2;
        /// Potentially harmful situations.
        const WARN = 1 << 3;
        /// Errors that still allow the application to continue running.
        const ERROR = 1 << 4;
        /// Union of all five levels.
        const ALL = Self::TRACE.bits()
            | Self::INFO.bits()
            | Self::DEBUG.bits()
            | Self::WARN.bits()
            | Self::ERROR.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_pairwise_disjoint_powers_of_two() {
        let flags = [
            Level::TRACE,
            Level::INFO,
            Level::DEBUG,
            Level::WARN,
            Level::ERROR,
        ];
        for (i, a) in flags.iter().enumerate() {
            assert!(a.bits().is_power_of_two());
            for b in &flags[i + 1..] {
                assert!((*a & *b).is_empty());
            }
        }
    }

    #[test]
    fn all_is_the_union_of_the_five() {
        let union = Level::TRACE | Level::INFO | Level::DEBUG | Level::WARN | Level::ERROR;
        assert_eq!(Level::ALL, union);
    }

    #[test]
    fn membership_is_set_intersection_not_threshold() {
        let mask = Level::TRACE | Level::ERROR;
        assert!(mask.intersects(Level::TRACE));
        assert!(mask.intersects(Level::ERROR));
        assert!(!mask.intersects(Level::INFO));
        assert!(!mask.intersects(Level::DEBUG));
        assert!(!mask.intersects(Level::WARN));
    }

    #[test]
    fn unknown_bits_never_match_known_categories() {
        let mask = Level::from_bits_retain(1 << 9);
        assert!(!mask.intersects(Level::ALL));
    }
}

//! Limits for configuration values.

use std::cmp;

//------------ DefMinMax -----------------------------------------------------

/// The default, minimum, and maximum values for a config variable.
#[derive(Clone, Copy, Debug)]
pub struct DefMinMax<T> {
    /// The default value,
    def: T,

    /// The minimum value,
    min: T,

    /// The maximum value,
    max: T,
}

impl<T> DefMinMax<T> {
    /// Creates a new value.
    pub const fn new(def: T, min: T, max: T) -> Self {
        Self { def, min, max }
    }

    /// Returns the default value.
    pub fn default(self) -> T {
        self.def
    }

    /// Trims the given value to fit into the minimum/maximum range.
    pub fn limit(self, value: T) -> T
    where
        T: Ord,
    {
        cmp::max(self.min, cmp::min(self.max, value))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    const LIMITS: DefMinMax<u16> = DefMinMax::new(512, 12, 4096);

    #[rstest]
    #[case(0, 12)]
    #[case(12, 12)]
    #[case(1232, 1232)]
    #[case(4096, 4096)]
    #[case(u16::MAX, 4096)]
    fn limit(#[case] value: u16, #[case] limited: u16) {
        assert_eq!(LIMITS.limit(value), limited);
        assert_eq!(LIMITS.default(), 512);
    }
}

/// Maximum escape-time steps per pixel. Never below [`IterationBudget::MIN`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IterationBudget(u32);

impl IterationBudget {
    pub const MIN: u32 = 1;

    /// Values below the floor are clamped up to it.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self(max_iterations.max(Self::MIN))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn doubled(self) -> Self {
        Self(self.0.saturating_mul(2))
    }

    #[must_use]
    pub fn halved(self) -> Self {
        Self::new(self.0 / 2)
    }
}

impl From<u32> for IterationBudget {
    fn from(max_iterations: u32) -> Self {
        Self::new(max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_clamped_to_floor() {
        assert_eq!(IterationBudget::new(0).get(), 1);
    }

    #[test]
    fn test_doubled() {
        assert_eq!(IterationBudget::new(10).doubled().get(), 20);
        assert_eq!(IterationBudget::new(u32::MAX).doubled().get(), u32::MAX);
    }

    #[test]
    fn test_halved() {
        assert_eq!(IterationBudget::new(64).halved().get(), 32);
        assert_eq!(IterationBudget::new(3).halved().get(), 1);
    }

    #[test]
    fn test_repeated_halving_never_reaches_zero() {
        let mut budget = IterationBudget::new(128);

        for _ in 0..20 {
            budget = budget.halved();
        }

        assert_eq!(budget.get(), 1);
    }
}

use rand::{
    distributions::{Bernoulli, Distribution},
    Rng,
};

use crate::{error::ConfigError, util::ensure_interval};

use super::Choice;

/// Epsilon greedy exploration policy with a fixed epsilon threshold
///
/// Every call to [`choose`](EpsilonGreedy::choose) is an independent Bernoulli trial that
/// explores with probability `epsilon`.
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    epsilon: f64,
    trial: Bernoulli,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy
    ///
    /// **Errors** if `epsilon` is not in the interval `[0,1]`
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        ensure_interval!(epsilon, 0.0, 1.0);
        let trial = Bernoulli::new(epsilon).map_err(|_| ConfigError::OutOfInterval {
            name: "epsilon",
            value: epsilon,
            interval: String::from("[0, 1]"),
        })?;
        Ok(Self { epsilon, trial })
    }

    /// The probability of exploring
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Invoke epsilon greedy policy, drawing from `rng`
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        if self.trial.sample(rng) {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn rejects_epsilon_outside_unit_interval() {
        assert!(EpsilonGreedy::new(-0.01).is_err());
        assert!(EpsilonGreedy::new(1.01).is_err());
        assert!(EpsilonGreedy::new(f64::NAN).is_err());
        assert_eq!(EpsilonGreedy::new(0.25).unwrap().epsilon(), 0.25);
    }

    #[test]
    fn extreme_epsilons_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let never = EpsilonGreedy::new(0.0).unwrap();
        let always = EpsilonGreedy::new(1.0).unwrap();
        for _ in 0..1000 {
            assert_eq!(never.choose(&mut rng), Choice::Exploit);
            assert_eq!(always.choose(&mut rng), Choice::Explore);
        }
    }

    #[test]
    fn explores_with_probability_epsilon() {
        const TRIALS: usize = 20_000;
        let mut rng = StdRng::seed_from_u64(42);
        let policy = EpsilonGreedy::new(0.3).unwrap();
        let explored = (0..TRIALS)
            .filter(|_| policy.choose(&mut rng) == Choice::Explore)
            .count();
        let frequency = explored as f64 / TRIALS as f64;
        assert!(
            (frequency - 0.3).abs() < 0.02,
            "explored with frequency {frequency}"
        );
    }
}

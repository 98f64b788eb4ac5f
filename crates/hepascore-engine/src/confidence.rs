//! Confidence value sources.

use rand::Rng;

use crate::traits::ConfidenceSource;

/// Draws uniformly from [75.0, 95.0) on the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomConfidence;

impl ConfidenceSource for RandomConfidence {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(75.0..95.0)
    }
}

/// Returns a constant value. Used in tests and for deterministic CLI output.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfidence(pub f64);

impl ConfidenceSource for FixedConfidence {
    fn sample(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_confidence_stays_in_range() {
        let source = RandomConfidence;
        for _ in 0..1000 {
            let c = source.sample();
            assert!((75.0..95.0).contains(&c), "confidence {} out of range", c);
        }
    }

    #[test]
    fn fixed_confidence_echoes_its_value() {
        assert_eq!(FixedConfidence(82.5).sample(), 82.5);
    }
}

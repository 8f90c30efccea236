//! # Mutation
//!
//! Per-gene Bernoulli mutation. Every locus of every offspring draws one
//! uniform value from the run's random stream; when it falls below the
//! effective rate the evaluator's `mutate_gene` hook is called for that
//! chromosome and locus. The engine never assumes what the hook does to the
//! gene, only that it keeps the chromosome length.
//!
//! The effective rate is recomputed every generation:
//!
//! - [`FixedMutation`]: the configured rate.
//! - [`AdaptiveMutation`]: `rate * (1 + generation / total_generations)`,
//!   climbing linearly toward twice the configured rate as the budget runs out.

use std::fmt::Debug;

use crate::chromosome::Population;
use crate::error::{GeneticError, Result};
use crate::evaluator::Evaluator;
use crate::rng::RandomNumberGenerator;

/// Where the run stands when mutation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationContext {
    /// The configured base mutation rate.
    pub rate: f64,
    /// The current generation, starting at 1.
    pub generation: usize,
    /// The generation budget of the run.
    pub total_generations: usize,
}

/// Trait for mutation strategies.
pub trait MutationStrategy: Debug + Send + Sync {
    /// The per-locus mutation probability for the given context.
    fn effective_rate(&self, context: &MutationContext) -> f64;

    /// Mutates `offspring` in place.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::ChromosomeLength`] if the evaluator's hook
    /// changed the length of a chromosome.
    fn mutate<E: Evaluator>(
        &self,
        offspring: &mut Population<E::Gene>,
        evaluator: &E,
        context: &MutationContext,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let rate = self.effective_rate(context);

        for chromosome in offspring.iter_mut() {
            let len = chromosome.len();
            for locus in 0..len {
                if rng.gen_unit() < rate {
                    evaluator.mutate_gene(chromosome, locus, rng);
                    if chromosome.len() != len {
                        return Err(GeneticError::ChromosomeLength {
                            expected: len,
                            actual: chromosome.len(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Mutation at the configured rate for the whole run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMutation;

impl MutationStrategy for FixedMutation {
    fn effective_rate(&self, context: &MutationContext) -> f64 {
        context.rate
    }
}

/// Mutation whose rate grows with the generation number.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveMutation;

impl MutationStrategy for AdaptiveMutation {
    fn effective_rate(&self, context: &MutationContext) -> f64 {
        if context.total_generations == 0 {
            return context.rate;
        }
        context.rate * (1.0 + context.generation as f64 / context.total_generations as f64)
    }
}

/// The mutation policy chosen for a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationMethod {
    #[default]
    Fixed,
    Adaptive,
}

impl MutationStrategy for MutationMethod {
    fn effective_rate(&self, context: &MutationContext) -> f64 {
        match self {
            MutationMethod::Fixed => FixedMutation.effective_rate(context),
            MutationMethod::Adaptive => AdaptiveMutation.effective_rate(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::evaluator::test_support::BinaryValue;
    use crate::evaluator::Solution;

    fn context(rate: f64, generation: usize, total_generations: usize) -> MutationContext {
        MutationContext {
            rate,
            generation,
            total_generations,
        }
    }

    /// Records every (chromosome id, locus) the engine asks it to mutate.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: std::cell::RefCell<Vec<(u32, usize)>>,
    }

    impl Evaluator for Recorder {
        type Gene = u32;
        type Element = u32;

        fn domain_size(&self) -> usize {
            3
        }

        fn evaluate(&self, _solution: &Solution<u32>) -> Result<f64> {
            Ok(0.0)
        }

        fn decode(&self, chromosome: &Chromosome<u32>) -> Result<Solution<u32>> {
            Ok(Solution {
                elements: chromosome.genes().to_vec(),
                cost: 0.0,
            })
        }

        fn random_chromosome(&self, _rng: &mut RandomNumberGenerator) -> Chromosome<u32> {
            Chromosome::new(vec![0; 3])
        }

        fn mutate_gene(
            &self,
            chromosome: &mut Chromosome<u32>,
            locus: usize,
            _rng: &mut RandomNumberGenerator,
        ) {
            self.calls.borrow_mut().push((chromosome[0], locus));
        }
    }

    #[derive(Debug)]
    struct Truncating;

    impl Evaluator for Truncating {
        type Gene = u8;
        type Element = usize;

        fn domain_size(&self) -> usize {
            2
        }

        fn evaluate(&self, _solution: &Solution<usize>) -> Result<f64> {
            Ok(0.0)
        }

        fn decode(&self, _chromosome: &Chromosome<u8>) -> Result<Solution<usize>> {
            Ok(Solution::with_cost(0.0))
        }

        fn random_chromosome(&self, _rng: &mut RandomNumberGenerator) -> Chromosome<u8> {
            Chromosome::new(vec![0, 0])
        }

        fn mutate_gene(
            &self,
            chromosome: &mut Chromosome<u8>,
            _: usize,
            _: &mut RandomNumberGenerator,
        ) {
            *chromosome = Chromosome::new(vec![0]);
        }
    }

    #[test]
    fn test_fixed_rate_is_constant() {
        for generation in 1..=10 {
            assert_eq!(FixedMutation.effective_rate(&context(0.05, generation, 10)), 0.05);
        }
    }

    #[test]
    fn test_adaptive_rate_grows_linearly() {
        let first = AdaptiveMutation.effective_rate(&context(0.1, 1, 10));
        let middle = AdaptiveMutation.effective_rate(&context(0.1, 5, 10));
        let last = AdaptiveMutation.effective_rate(&context(0.1, 10, 10));

        assert!((first - 0.11).abs() < 1e-12);
        assert!((middle - 0.15).abs() < 1e-12);
        assert!((last - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_adaptive_rate_with_zero_budget() {
        assert_eq!(AdaptiveMutation.effective_rate(&context(0.1, 0, 0)), 0.1);
    }

    #[test]
    fn test_method_dispatch() {
        let ctx = context(0.2, 2, 4);
        assert_eq!(MutationMethod::Fixed.effective_rate(&ctx), 0.2);
        assert!((MutationMethod::Adaptive.effective_rate(&ctx) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_rate_zero_never_mutates() {
        let evaluator = BinaryValue { size: 4 };
        let mut offspring: Population<u8> =
            vec![Chromosome::new(vec![0, 1, 0, 1]); 4].into();
        let before = offspring.clone();
        let mut rng = RandomNumberGenerator::from_seed(1);

        FixedMutation
            .mutate(&mut offspring, &evaluator, &context(0.0, 1, 1), &mut rng)
            .unwrap();
        assert_eq!(offspring, before);
    }

    #[test]
    fn test_rate_one_flips_every_bit() {
        let evaluator = BinaryValue { size: 4 };
        let mut offspring: Population<u8> =
            vec![Chromosome::new(vec![0, 1, 0, 1]); 2].into();
        let mut rng = RandomNumberGenerator::from_seed(1);

        FixedMutation
            .mutate(&mut offspring, &evaluator, &context(1.0, 1, 1), &mut rng)
            .unwrap();
        for chromosome in offspring.iter() {
            assert_eq!(chromosome.genes(), &[1, 0, 1, 0]);
        }
    }

    #[test]
    fn test_hook_receives_chromosome_and_locus() {
        let evaluator = Recorder::default();
        let mut offspring: Population<u32> = (0..3)
            .map(|id| Chromosome::new(vec![id, 0, 0]))
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(12);
        let mut replay = rng.clone();

        FixedMutation
            .mutate(&mut offspring, &evaluator, &context(0.5, 1, 1), &mut rng)
            .unwrap();

        let mut expected = Vec::new();
        for id in 0..3 {
            for locus in 0..3 {
                if replay.gen_unit() < 0.5 {
                    expected.push((id, locus));
                }
            }
        }
        assert_eq!(*evaluator.calls.borrow(), expected);
    }

    #[test]
    fn test_length_change_is_reported() {
        let mut offspring: Population<u8> = vec![Chromosome::new(vec![0, 0])].into();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result =
            FixedMutation.mutate(&mut offspring, &Truncating, &context(1.0, 1, 1), &mut rng);
        assert!(matches!(
            result,
            Err(GeneticError::ChromosomeLength {
                expected: 2,
                actual: 1
            })
        ));
    }
}

use crate::chromosome::{Chromosome, Population};
use crate::crossover::crossover_strategy::{parent_pairs, CrossoverStrategy};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Uniform crossover.
///
/// Each locus of each pair flips its own fair coin: heads keeps the genes
/// with their parents, tails exchanges them between the two offspring.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl<G> CrossoverStrategy<G> for UniformCrossover
where
    G: Clone,
{
    fn crossover(
        &self,
        parents: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        let mut offspring = Population::with_capacity(parents.len());

        for (parent1, parent2) in parent_pairs(parents)? {
            let mut child1 = Vec::with_capacity(parent1.len());
            let mut child2 = Vec::with_capacity(parent2.len());

            for (a, b) in parent1.iter().zip(parent2.iter()) {
                if rng.gen_coin() {
                    child1.push(a.clone());
                    child2.push(b.clone());
                } else {
                    child1.push(b.clone());
                    child2.push(a.clone());
                }
            }

            offspring.push(Chromosome::new(child1));
            offspring.push(Chromosome::new(child2));
        }

        Ok(offspring)
    }
}

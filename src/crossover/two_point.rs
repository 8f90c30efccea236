use crate::chromosome::{Chromosome, Population};
use crate::crossover::crossover_strategy::{parent_pairs, CrossoverStrategy};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Two-point crossover.
///
/// For each pair the first cut point is drawn from `[0, L]` and the second
/// from `[first, L]`. Genes with index in `[first, second)` are exchanged
/// between the offspring; all others are copied from the matching parent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Draws the two cut points for a chromosome of length `len`.
    fn draw_cut_points(&self, len: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        let first = rng.gen_index(len + 1);
        let second = first + rng.gen_index(len + 1 - first);
        (first, second)
    }
}

/// Recombines two parents with explicit cut points.
///
/// Each locus keeps the pair of values the parents had there; only which
/// offspring holds which value may change. Equal cut points produce exact
/// copies of the parents.
///
/// # Errors
///
/// Returns an error if the parents differ in length or the cut points are
/// not ordered within `[0, len]`.
///
/// # Examples
///
/// ```
/// use scqbf_ga::chromosome::Chromosome;
/// use scqbf_ga::crossover::two_point_pair;
///
/// let a = Chromosome::new(vec![0, 0, 0, 0]);
/// let b = Chromosome::new(vec![1, 1, 1, 1]);
///
/// let (x, y) = two_point_pair(&a, &b, 1, 3).unwrap();
/// assert_eq!(x.genes(), &[0, 1, 1, 0]);
/// assert_eq!(y.genes(), &[1, 0, 0, 1]);
/// ```
pub fn two_point_pair<G: Clone>(
    parent1: &Chromosome<G>,
    parent2: &Chromosome<G>,
    first: usize,
    second: usize,
) -> Result<(Chromosome<G>, Chromosome<G>)> {
    if parent1.len() != parent2.len() {
        return Err(GeneticError::ChromosomeLength {
            expected: parent1.len(),
            actual: parent2.len(),
        });
    }

    if first > second || second > parent1.len() {
        return Err(GeneticError::OutOfBounds(format!(
            "Cut points ({}, {}) are not ordered within [0, {}]",
            first,
            second,
            parent1.len()
        )));
    }

    let (offspring1, offspring2) = parent1
        .iter()
        .zip(parent2.iter())
        .enumerate()
        .map(|(locus, (a, b))| {
            if (first..second).contains(&locus) {
                (b.clone(), a.clone())
            } else {
                (a.clone(), b.clone())
            }
        })
        .unzip::<G, G, Vec<G>, Vec<G>>();

    Ok((offspring1.into(), offspring2.into()))
}

impl<G> CrossoverStrategy<G> for TwoPointCrossover
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
            let (first, second) = self.draw_cut_points(parent1.len(), rng);
            let (child1, child2) = two_point_pair(parent1, parent2, first, second)?;
            offspring.push(child1);
            offspring.push(child2);
        }

        Ok(offspring)
    }
}

use crate::chromosome::Population;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{validate_inputs, SelectionStrategy};

/// Stochastic universal sampling.
///
/// Lays `n` evenly spaced pointers over the cumulative fitness, starting at
/// a single uniform offset in `[0, total / n)`, and walks the population once.
/// A chromosome is appended once for every pointer that falls at or below
/// the running fitness sum while it is the current chromosome, so individual
/// `i` is expected to be selected `n * f_i / sum(f)` times with far less
/// variance than roulette-wheel sampling.
///
/// Fitness-proportionate sampling is only meaningful for finite,
/// non-negative fitness with a positive, finite total. Anything else is
/// rejected with [`GeneticError::Selection`] instead of silently producing
/// a skewed parent pool.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticUniversalSampling;

impl StochasticUniversalSampling {
    fn total_fitness(&self, fitness: &[f64]) -> Result<f64> {
        if let Some(invalid) = fitness.iter().find(|&&f| !f.is_finite() || f < 0.0) {
            return Err(GeneticError::Selection(format!(
                "Stochastic universal sampling requires finite, non-negative fitness values, \
                 found {}",
                invalid
            )));
        }

        let total: f64 = fitness.iter().sum();
        if !total.is_finite() {
            return Err(GeneticError::Selection(
                "Stochastic universal sampling total fitness overflows".to_string(),
            ));
        }
        if total <= 0.0 {
            return Err(GeneticError::Selection(
                "Stochastic universal sampling requires a positive total fitness".to_string(),
            ));
        }

        Ok(total)
    }
}

impl<G> SelectionStrategy<G> for StochasticUniversalSampling
where
    G: Clone,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        validate_inputs(population, fitness)?;

        let size = population.len();
        let total = self.total_fitness(fitness)?;
        let distance = total / size as f64;
        let start = rng.gen_unit() * distance;

        let mut parents = Population::with_capacity(size);
        let mut pointer = 0;
        let mut running = 0.0;
        for (chromosome, &value) in population.iter().zip(fitness) {
            running += value;
            while pointer < size && start + pointer as f64 * distance <= running {
                parents.push(chromosome.clone());
                pointer += 1;
            }
        }

        // Rounding in the running sum can leave the last pointers just past
        // the final total; they belong to the last chromosome with a nonzero span.
        if parents.len() < size {
            let last = fitness
                .iter()
                .rposition(|&f| f > 0.0)
                .ok_or_else(|| {
                    GeneticError::Selection("No chromosome has positive fitness".to_string())
                })?;
            while parents.len() < size {
                parents.push(population[last].clone());
            }
        }

        Ok(parents)
    }
}

use crate::error::{GeneticError, OptionExt, Result};
use crate::evaluator::{worst_index, ScoredPopulation};
use crate::replacement::{Incumbent, ReplacementStrategy};

/// Elitist replacement.
///
/// The offspring become the next generation, except that the first
/// offspring with the lowest fitness is swapped for the incumbent when the
/// incumbent is strictly fitter. The incumbent takes the displaced
/// offspring's slot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistReplacement;

impl<G> ReplacementStrategy<G> for ElitistReplacement
where
    G: Clone,
{
    fn replace(
        &self,
        _previous: ScoredPopulation<G>,
        incumbent: &Incumbent<G>,
        offspring: ScoredPopulation<G>,
    ) -> Result<ScoredPopulation<G>> {
        offspring.check_aligned()?;
        let ScoredPopulation {
            mut population,
            mut fitness,
        } = offspring;

        let worst = worst_index(&fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        if fitness[worst] < incumbent.fitness {
            population.replace(worst, incumbent.chromosome.clone());
            fitness[worst] = incumbent.fitness;
        }

        ScoredPopulation::new(population, fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::{Chromosome, Population};

    fn scored(genes: &[u8], fitness: &[f64]) -> ScoredPopulation<u8> {
        let population: Population<u8> = genes.iter().map(|&g| Chromosome::new(vec![g])).collect();
        ScoredPopulation::new(population, fitness.to_vec()).unwrap()
    }

    fn incumbent(gene: u8, fitness: f64) -> Incumbent<u8> {
        Incumbent {
            chromosome: Chromosome::new(vec![gene]),
            fitness,
        }
    }

    #[test]
    fn test_incumbent_replaces_strictly_worse_offspring() {
        let previous = scored(&[9, 8, 7, 6], &[9.0, 8.0, 7.0, 6.0]);
        let offspring = scored(&[1, 2, 3, 4], &[5.0, 1.0, 4.0, 3.0]);

        let next = ElitistReplacement
            .replace(previous, &incumbent(9, 9.0), offspring)
            .unwrap();

        assert_eq!(next.len(), 4);
        assert!(next.population.iter().any(|c| c[0] == 9));
        assert!(next.population.iter().all(|c| c[0] != 2));
        assert_eq!(next.population[1][0], 9);
        assert_eq!(next.fitness, vec![5.0, 9.0, 4.0, 3.0]);
    }

    #[test]
    fn test_offspring_pass_through_when_not_worse() {
        let previous = scored(&[9, 8], &[2.0, 1.0]);
        let offspring = scored(&[1, 2], &[2.0, 3.0]);

        let next = ElitistReplacement
            .replace(previous, &incumbent(9, 2.0), offspring.clone())
            .unwrap();
        assert_eq!(next, offspring);
    }

    #[test]
    fn test_only_first_worst_is_replaced() {
        let previous = scored(&[9, 8], &[5.0, 1.0]);
        let offspring = scored(&[1, 2, 3, 4], &[3.0, 1.0, 1.0, 2.0]);

        let next = ElitistReplacement
            .replace(previous, &incumbent(9, 5.0), offspring)
            .unwrap();
        let genes: Vec<u8> = next.population.iter().map(|c| c[0]).collect();
        assert_eq!(genes, vec![1, 9, 3, 4]);
    }

    #[test]
    fn test_misaligned_offspring_is_an_error() {
        let previous = scored(&[9, 8], &[1.0, 1.0]);
        let offspring = ScoredPopulation {
            population: vec![Chromosome::new(vec![1]), Chromosome::new(vec![2])].into(),
            fitness: vec![3.0, 2.0, 0.5],
        };

        let result = ElitistReplacement.replace(previous, &incumbent(9, 5.0), offspring);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_empty_offspring() {
        let previous = scored(&[9], &[1.0]);
        let offspring = scored(&[], &[]);

        let result = ElitistReplacement.replace(previous, &incumbent(9, 1.0), offspring);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}

use tracing::{debug, info, info_span};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    chromosome::{Chromosome, Population},
    crossover::CrossoverStrategy,
    error::{GeneticError, OptionExt, Result},
    evaluator::{Evaluator, ScoredPopulation, Solution},
    mutation::{MutationContext, MutationStrategy},
    replacement::{Incumbent, ReplacementStrategy},
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
};

/// Represents the result of an evolution: the best-ever solution, the
/// chromosome it was decoded from and the best-ever cost after each generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<G, T> {
    /// The decoded best-ever solution.
    pub solution: Solution<T>,
    /// The chromosome `solution` was decoded from.
    pub chromosome: Chromosome<G>,
    /// `history[g]` is the best-ever cost once generation `g` completed;
    /// `history[0]` belongs to the initial population.
    pub history: Vec<f64>,
}

impl<G, T> EvolutionResult<G, T> {
    /// The cost of the best-ever solution.
    pub fn best_cost(&self) -> f64 {
        self.solution.cost
    }
}

/// A snapshot handed to the observer after the initial population is scored
/// and after every generation.
#[derive(Debug)]
pub struct GenerationReport<'a, G, T> {
    /// 0 for the initial population, then 1..=G.
    pub generation: usize,
    /// The population the generation ended with.
    pub population: &'a Population<G>,
    /// Fitness of each chromosome of `population`.
    pub fitness: &'a [f64],
    /// The highest fitness within `population`.
    pub population_best: f64,
    /// The best-ever solution so far.
    pub best_solution: &'a Solution<T>,
}

/// Runs the generational loop Select, Crossover, Mutate, Replace over an
/// evaluator's chromosomes.
///
/// The launcher owns its random stream and generation counter, so any
/// number of launchers can run side by side without sharing state. Two
/// launchers built from the same seed, options and evaluator produce
/// identical runs.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<E>
where
    E: Evaluator,
{
    evaluator: E,
    options: EvolutionOptions,
    rng: RandomNumberGenerator,
    generation: usize,
}

impl<E> EvolutionLauncher<E>
where
    E: Evaluator,
{
    /// Creates a new `EvolutionLauncher`.
    ///
    /// # Arguments
    ///
    /// * `evaluator` - Decodes and scores chromosomes.
    /// * `options` - The run configuration. Validated again here.
    /// * `rng` - The random stream for the whole run.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `options` does not validate.
    pub fn new(
        evaluator: E,
        options: EvolutionOptions,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            evaluator,
            options,
            rng,
            generation: 0,
        })
    }

    /// Creates a launcher whose random stream is seeded with `seed`.
    pub fn with_seed(evaluator: E, options: EvolutionOptions, seed: u64) -> Result<Self> {
        Self::new(evaluator, options, RandomNumberGenerator::from_seed(seed))
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// The generation the launcher is in or last completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Builds a population of `population_size` random chromosomes.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::ChromosomeLength`] if the evaluator produced
    /// a chromosome whose length differs from its domain size.
    pub fn initialize_population(&mut self) -> Result<Population<E::Gene>> {
        let size = self.options.get_population_size();
        let domain_size = self.evaluator.domain_size();

        let mut population = Population::with_capacity(size);
        while population.len() < size {
            let chromosome = self.evaluator.random_chromosome(&mut self.rng);
            if chromosome.len() != domain_size {
                return Err(GeneticError::ChromosomeLength {
                    expected: domain_size,
                    actual: chromosome.len(),
                });
            }
            population.push(chromosome);
        }

        Ok(population)
    }

    /// Evolves a population over the configured number of generations and
    /// returns the best-ever solution.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - An evaluator hook fails or yields a non-finite fitness
    /// - An evaluator hook breaks the chromosome length invariant
    /// - Stochastic universal sampling meets fitness it cannot sample
    pub fn evolve(&mut self) -> Result<EvolutionResult<E::Gene, E::Element>> {
        self.evolve_with_observer(|_| {})
    }

    /// Like [`evolve`](Self::evolve), calling `observer` after the initial
    /// population is scored and after every generation.
    pub fn evolve_with_observer<F>(
        &mut self,
        mut observer: F,
    ) -> Result<EvolutionResult<E::Gene, E::Element>>
    where
        F: FnMut(&GenerationReport<'_, E::Gene, E::Element>),
    {
        let num_generations = self.options.get_num_generations();
        let population_size = self.options.get_population_size();
        let domain_size = self.evaluator.domain_size();
        let log_level = self.options.get_log_level();

        let span = info_span!(
            "evolve",
            generations = num_generations,
            population_size,
            domain_size
        );
        let _enter = span.enter();

        self.generation = 0;
        let initial = self.initialize_population()?;
        let mut current = ScoredPopulation::evaluate(&self.evaluator, initial)?;

        let (chromosome, fitness) = current
            .best()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let mut incumbent = Incumbent {
            chromosome: chromosome.clone(),
            fitness,
        };
        let mut best_chromosome = incumbent.chromosome.clone();
        let mut best_solution = self.evaluator.decode(&best_chromosome)?;
        let mut history = Vec::with_capacity(num_generations + 1);
        history.push(best_solution.cost);

        if log_level != LogLevel::None {
            info!(generation = 0, cost = best_solution.cost, "best solution");
        }
        observer(&GenerationReport {
            generation: 0,
            population: &current.population,
            fitness: &current.fitness,
            population_best: incumbent.fitness,
            best_solution: &best_solution,
        });

        for generation in 1..=num_generations {
            self.generation = generation;

            let parents = self.options.get_selection().select(
                &current.population,
                &current.fitness,
                &mut self.rng,
            )?;
            let mut offspring = self
                .options
                .get_crossover()
                .crossover(&parents, &mut self.rng)?;

            let context = MutationContext {
                rate: self.options.get_mutation_rate(),
                generation,
                total_generations: num_generations,
            };
            self.options.get_mutation().mutate(
                &mut offspring,
                &self.evaluator,
                &context,
                &mut self.rng,
            )?;

            offspring.check_size(population_size)?;
            offspring.check_lengths(domain_size)?;
            let offspring = ScoredPopulation::evaluate(&self.evaluator, offspring)?;

            current = self
                .options
                .get_replacement()
                .replace(current, &incumbent, offspring)?;
            current.population.check_size(population_size)?;

            let (chromosome, fitness) = current
                .best()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            incumbent = Incumbent {
                chromosome: chromosome.clone(),
                fitness,
            };

            if incumbent.fitness > best_solution.cost {
                best_solution = self.evaluator.decode(&incumbent.chromosome)?;
                best_chromosome = incumbent.chromosome.clone();
                if log_level != LogLevel::None {
                    info!(generation, cost = best_solution.cost, "best solution");
                }
            }
            history.push(best_solution.cost);

            if log_level == LogLevel::Verbose {
                debug!(
                    generation,
                    population_best = incumbent.fitness,
                    best_cost = best_solution.cost,
                    elements = ?best_solution.elements,
                    "generation complete"
                );
            }
            observer(&GenerationReport {
                generation,
                population: &current.population,
                fitness: &current.fitness,
                population_best: incumbent.fitness,
                best_solution: &best_solution,
            });
        }

        Ok(EvolutionResult {
            solution: best_solution,
            chromosome: best_chromosome,
            history,
        })
    }
}

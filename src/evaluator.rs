//! # Evaluator Trait
//!
//! The `Evaluator` trait is the only way the engine learns anything about
//! the problem being solved. It supplies the gene-domain size, builds random
//! chromosomes, perturbs single loci, and decodes a chromosome into a
//! problem-specific [`Solution`] carrying a scalar cost. Higher cost is
//! better: the engine maximizes.
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use scqbf_ga::chromosome::Chromosome;
//! use scqbf_ga::error::Result;
//! use scqbf_ga::evaluator::{Evaluator, Solution};
//! use scqbf_ga::rng::RandomNumberGenerator;
//!
//! /// Counts the ones in a bit string.
//! struct OneMax {
//!     size: usize,
//! }
//!
//! impl Evaluator for OneMax {
//!     type Gene = u8;
//!     type Element = usize;
//!
//!     fn domain_size(&self) -> usize {
//!         self.size
//!     }
//!
//!     fn evaluate(&self, solution: &Solution<usize>) -> Result<f64> {
//!         Ok(solution.len() as f64)
//!     }
//!
//!     fn decode(&self, chromosome: &Chromosome<u8>) -> Result<Solution<usize>> {
//!         let mut solution = self.create_empty_solution();
//!         for (locus, gene) in chromosome.iter().enumerate() {
//!             if *gene == 1 {
//!                 solution.push(locus);
//!             }
//!         }
//!         solution.cost = self.evaluate(&solution)?;
//!         Ok(solution)
//!     }
//!
//!     fn random_chromosome(&self, rng: &mut RandomNumberGenerator) -> Chromosome<u8> {
//!         (0..self.size).map(|_| rng.gen_coin() as u8).collect()
//!     }
//!
//!     fn mutate_gene(
//!         &self,
//!         chromosome: &mut Chromosome<u8>,
//!         locus: usize,
//!         _rng: &mut RandomNumberGenerator,
//!     ) {
//!         chromosome[locus] = 1 - chromosome[locus];
//!     }
//! }
//!
//! let evaluator = OneMax { size: 4 };
//! let fitness = evaluator.fitness(&Chromosome::new(vec![1, 0, 1, 1])).unwrap();
//! assert_eq!(fitness, 3.0);
//! ```

use std::fmt::Debug;

use crate::chromosome::{Chromosome, Population};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// The decoded interpretation of a chromosome: the selected domain elements
/// and the cost the evaluator assigned to them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<E> {
    /// The selected elements, in decode order.
    pub elements: Vec<E>,
    /// The objective value. Higher is better.
    pub cost: f64,
}

impl<E> Solution<E> {
    /// Creates a solution with no elements and the given cost.
    pub fn with_cost(cost: f64) -> Self {
        Self {
            elements: Vec::new(),
            cost,
        }
    }

    pub fn push(&mut self, element: E) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Capability interface between the engine and a concrete problem.
///
/// Every method must be deterministic for a given chromosome and evaluator
/// state. Randomness only enters through the `rng` handed in by the engine,
/// which keeps whole runs reproducible.
pub trait Evaluator {
    /// The value stored at one locus.
    type Gene: Clone + Debug + PartialEq;
    /// The element type a decoded solution is made of.
    type Element: Clone + Debug;

    /// The fixed length of every chromosome.
    fn domain_size(&self) -> usize;

    /// Computes the cost of an already decoded solution.
    fn evaluate(&self, solution: &Solution<Self::Element>) -> Result<f64>;

    /// Decodes a chromosome into a solution and assigns its cost.
    fn decode(&self, chromosome: &Chromosome<Self::Gene>) -> Result<Solution<Self::Element>>;

    /// Builds a chromosome of length `domain_size()` with independently drawn genes.
    fn random_chromosome(&self, rng: &mut RandomNumberGenerator) -> Chromosome<Self::Gene>;

    /// Perturbs a single locus in place. Must keep the length and leave the
    /// gene inside the problem domain.
    fn mutate_gene(
        &self,
        chromosome: &mut Chromosome<Self::Gene>,
        locus: usize,
        rng: &mut RandomNumberGenerator,
    );

    /// An empty solution whose cost is the neutral value for maximization.
    fn create_empty_solution(&self) -> Solution<Self::Element> {
        Solution::with_cost(f64::NEG_INFINITY)
    }

    /// The fitness of a chromosome: the cost of its decoded solution.
    fn fitness(&self, chromosome: &Chromosome<Self::Gene>) -> Result<f64> {
        Ok(self.decode(chromosome)?.cost)
    }
}

/// Computes the fitness of every chromosome of `population`, in order.
///
/// # Errors
///
/// Propagates evaluator failures and rejects non-finite fitness values,
/// which would otherwise poison every comparison made by the operators.
pub fn evaluate_population<E: Evaluator>(
    evaluator: &E,
    population: &Population<E::Gene>,
) -> Result<Vec<f64>> {
    population
        .iter()
        .map(|chromosome| {
            let fitness = evaluator.fitness(chromosome)?;
            if !fitness.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    fitness
                )));
            }
            Ok(fitness)
        })
        .collect()
}

/// A population together with the fitness of each of its chromosomes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPopulation<G> {
    pub population: Population<G>,
    pub fitness: Vec<f64>,
}

impl<G> ScoredPopulation<G> {
    /// Pairs a population with precomputed fitness values.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    pub fn new(population: Population<G>, fitness: Vec<f64>) -> Result<Self> {
        let scored = Self {
            population,
            fitness,
        };
        scored.check_aligned()?;
        Ok(scored)
    }

    /// Scores every chromosome of `population` with `evaluator`.
    pub fn evaluate<E>(evaluator: &E, population: Population<G>) -> Result<Self>
    where
        E: Evaluator<Gene = G>,
    {
        let fitness = evaluate_population(evaluator, &population)?;
        Ok(Self {
            population,
            fitness,
        })
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Fails unless there is exactly one fitness value per chromosome.
    pub fn check_aligned(&self) -> Result<()> {
        if self.population.len() != self.fitness.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                self.fitness.len(),
                self.population.len()
            )));
        }
        Ok(())
    }

    /// The first chromosome with the highest fitness and that fitness.
    pub fn best(&self) -> Option<(&Chromosome<G>, f64)> {
        best_index(&self.fitness).map(|i| (&self.population[i], self.fitness[i]))
    }
}

/// Returns the index of the first chromosome with the highest fitness.
pub(crate) fn best_index(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &value) in fitness.iter().enumerate() {
        match best {
            Some(b) if fitness[b] >= value => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Returns the index of the first chromosome with the lowest fitness.
pub(crate) fn worst_index(fitness: &[f64]) -> Option<usize> {
    let mut worst: Option<usize> = None;
    for (index, &value) in fitness.iter().enumerate() {
        match worst {
            Some(w) if fitness[w] <= value => {}
            _ => worst = Some(index),
        }
    }
    worst
}

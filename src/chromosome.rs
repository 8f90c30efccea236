//! # Chromosome and Population
//!
//! A `Chromosome` is a fixed-length ordered sequence of genes and a
//! `Population` is an ordered collection of chromosomes. Both are plain
//! containers: operators build new ones, mutation edits genes in place, and
//! nothing ever resizes a chromosome.

use std::ops::{Index, IndexMut};

use crate::error::{GeneticError, Result};

/// An ordered, fixed-length sequence of genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome<G> {
    genes: Vec<G>,
}

impl<G> Chromosome<G> {
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn get(&self, locus: usize) -> Option<&G> {
        self.genes.get(locus)
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    /// Mutable access to the genes. A slice cannot grow or shrink, so the
    /// length stays fixed.
    pub fn genes_mut(&mut self) -> &mut [G] {
        &mut self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.genes.iter()
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}

impl<G> From<Vec<G>> for Chromosome<G> {
    fn from(genes: Vec<G>) -> Self {
        Self::new(genes)
    }
}

impl<G> FromIterator<G> for Chromosome<G> {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<G> Index<usize> for Chromosome<G> {
    type Output = G;

    fn index(&self, locus: usize) -> &G {
        &self.genes[locus]
    }
}

impl<G> IndexMut<usize> for Chromosome<G> {
    fn index_mut(&mut self, locus: usize) -> &mut G {
        &mut self.genes[locus]
    }
}

/// An ordered collection of chromosomes representing one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population<G> {
    chromosomes: Vec<Chromosome<G>>,
}

impl<G> Population<G> {
    pub fn new() -> Self {
        Self {
            chromosomes: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chromosomes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn push(&mut self, chromosome: Chromosome<G>) {
        self.chromosomes.push(chromosome);
    }

    pub fn get(&self, index: usize) -> Option<&Chromosome<G>> {
        self.chromosomes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome<G>> {
        self.chromosomes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Chromosome<G>> {
        self.chromosomes.iter_mut()
    }

    pub fn as_slice(&self) -> &[Chromosome<G>] {
        &self.chromosomes
    }

    pub fn into_vec(self) -> Vec<Chromosome<G>> {
        self.chromosomes
    }

    /// Replaces the chromosome at `index`, returning the one it displaced.
    pub(crate) fn replace(&mut self, index: usize, chromosome: Chromosome<G>) -> Chromosome<G> {
        std::mem::replace(&mut self.chromosomes[index], chromosome)
    }

    /// Fails unless the population holds exactly `expected` chromosomes.
    pub fn check_size(&self, expected: usize) -> Result<()> {
        if self.chromosomes.len() != expected {
            return Err(GeneticError::Evolution(format!(
                "Population holds {} chromosomes, expected {}",
                self.chromosomes.len(),
                expected
            )));
        }
        Ok(())
    }

    /// Fails on the first chromosome whose length differs from `domain_size`.
    pub fn check_lengths(&self, domain_size: usize) -> Result<()> {
        match self.chromosomes.iter().find(|c| c.len() != domain_size) {
            Some(chromosome) => Err(GeneticError::ChromosomeLength {
                expected: domain_size,
                actual: chromosome.len(),
            }),
            None => Ok(()),
        }
    }
}

impl<G> Default for Population<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> From<Vec<Chromosome<G>>> for Population<G> {
    fn from(chromosomes: Vec<Chromosome<G>>) -> Self {
        Self { chromosomes }
    }
}

impl<G> FromIterator<Chromosome<G>> for Population<G> {
    fn from_iter<I: IntoIterator<Item = Chromosome<G>>>(iter: I) -> Self {
        Self {
            chromosomes: iter.into_iter().collect(),
        }
    }
}

impl<G> Index<usize> for Population<G> {
    type Output = Chromosome<G>;

    fn index(&self, index: usize) -> &Chromosome<G> {
        &self.chromosomes[index]
    }
}

impl<'a, G> IntoIterator for &'a Population<G> {
    type Item = &'a Chromosome<G>;
    type IntoIter = std::slice::Iter<'a, Chromosome<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromosome_access() {
        let mut chromosome = Chromosome::new(vec![0u8, 1, 1]);
        assert_eq!(chromosome.len(), 3);
        assert_eq!(chromosome.get(1), Some(&1));
        assert_eq!(chromosome.get(3), None);

        chromosome[0] = 1;
        chromosome.genes_mut()[2] = 0;
        assert_eq!(chromosome.genes(), &[1, 1, 0]);
    }

    #[test]
    fn test_population_checks() {
        let population: Population<u8> = vec![
            Chromosome::new(vec![0, 1]),
            Chromosome::new(vec![1, 1]),
        ]
        .into();

        assert!(population.check_size(2).is_ok());
        assert!(population.check_size(3).is_err());
        assert!(population.check_lengths(2).is_ok());

        match population.check_lengths(3) {
            Err(GeneticError::ChromosomeLength { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected ChromosomeLength error, got {:?}", other),
        }
    }

    #[test]
    fn test_population_replace() {
        let mut population: Population<u8> =
            (0..3).map(|i| Chromosome::new(vec![i])).collect();
        let old = population.replace(1, Chromosome::new(vec![9]));

        assert_eq!(old.genes(), &[1]);
        assert_eq!(population[1].genes(), &[9]);
        assert_eq!(population.len(), 3);
    }
}

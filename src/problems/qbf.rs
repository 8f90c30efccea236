//! # Quadratic Binary Function
//!
//! `QbfEvaluator` maximizes `f(x) = x^T A x` over binary vectors `x`. A
//! chromosome holds one bit per variable; decoding collects the indices of
//! the set bits, and the cost is the sum of `A[i][j]` over every ordered pair
//! of selected indices.

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::evaluator::{Evaluator, Solution};
use crate::rng::RandomNumberGenerator;

/// Evaluator for the quadratic binary function with a square coefficient matrix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct QbfEvaluator {
    matrix: Vec<Vec<f64>>,
}

impl QbfEvaluator {
    /// Creates an evaluator from a full `n x n` coefficient matrix.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the matrix is not square or holds a
    /// non-finite coefficient.
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self> {
        let size = matrix.len();
        if let Some((row, values)) = matrix.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GeneticError::Configuration(format!(
                "Coefficient matrix must be square: row {} has {} entries, expected {}",
                row,
                values.len(),
                size
            )));
        }

        if matrix.iter().flatten().any(|v| !v.is_finite()) {
            return Err(GeneticError::Configuration(
                "Coefficient matrix contains a non-finite value".to_string(),
            ));
        }

        Ok(Self { matrix })
    }

    /// Creates an evaluator from the rows of an upper-triangular matrix.
    ///
    /// Row `i` lists the coefficients `A[i][i], A[i][i+1], ...`; entries past
    /// the last column are ignored and missing entries are zero. Every
    /// off-diagonal coefficient is mirrored below the diagonal.
    pub fn from_upper_triangular(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut matrix = vec![vec![0.0; size]; size];

        for (i, row) in rows.iter().enumerate() {
            for (offset, &value) in row.iter().enumerate() {
                let j = i + offset;
                if j < size {
                    matrix[i][j] = value;
                    matrix[j][i] = value;
                }
            }
        }

        Self::new(matrix)
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn size(&self) -> usize {
        self.matrix.len()
    }
}

impl Evaluator for QbfEvaluator {
    type Gene = u8;
    type Element = usize;

    fn domain_size(&self) -> usize {
        self.matrix.len()
    }

    fn evaluate(&self, solution: &Solution<usize>) -> Result<f64> {
        if let Some(&out) = solution.elements.iter().find(|&&i| i >= self.size()) {
            return Err(GeneticError::OutOfBounds(format!(
                "Variable {} is outside a domain of size {}",
                out,
                self.size()
            )));
        }

        Ok(solution
            .elements
            .iter()
            .map(|&i| {
                solution
                    .elements
                    .iter()
                    .map(|&j| self.matrix[i][j])
                    .sum::<f64>()
            })
            .sum())
    }

    fn decode(&self, chromosome: &Chromosome<u8>) -> Result<Solution<usize>> {
        if chromosome.len() != self.size() {
            return Err(GeneticError::ChromosomeLength {
                expected: self.size(),
                actual: chromosome.len(),
            });
        }

        let mut solution = self.create_empty_solution();
        for (locus, &gene) in chromosome.iter().enumerate() {
            match gene {
                0 => {}
                1 => solution.push(locus),
                other => {
                    return Err(GeneticError::OutOfBounds(format!(
                        "Gene {} at locus {} is not binary",
                        other, locus
                    )))
                }
            }
        }
        solution.cost = self.evaluate(&solution)?;
        Ok(solution)
    }

    fn random_chromosome(&self, rng: &mut RandomNumberGenerator) -> Chromosome<u8> {
        (0..self.size())
            .map(|_| if rng.gen_unit() < 0.5 { 0 } else { 1 })
            .collect()
    }

    fn mutate_gene(
        &self,
        chromosome: &mut Chromosome<u8>,
        locus: usize,
        _rng: &mut RandomNumberGenerator,
    ) {
        chromosome[locus] = 1 - chromosome[locus];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> QbfEvaluator {
        QbfEvaluator::new(vec![
            vec![1.0, -2.0, 0.5],
            vec![-2.0, 3.0, 1.0],
            vec![0.5, 1.0, -1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        let result = QbfEvaluator::new(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_rejects_non_finite_coefficients() {
        let result = QbfEvaluator::new(vec![vec![f64::INFINITY]]);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_decode_and_evaluate() {
        let evaluator = evaluator();

        let solution = evaluator
            .decode(&Chromosome::new(vec![1, 1, 0]))
            .unwrap();
        assert_eq!(solution.elements, vec![0, 1]);
        // 1 + 3 - 2 - 2
        assert_eq!(solution.cost, 0.0);

        let solution = evaluator
            .decode(&Chromosome::new(vec![0, 1, 1]))
            .unwrap();
        // 3 - 1 + 1 + 1
        assert_eq!(solution.cost, 4.0);

        let empty = evaluator.decode(&Chromosome::new(vec![0, 0, 0])).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.cost, 0.0);
    }

    #[test]
    fn test_decode_rejects_bad_chromosomes() {
        let evaluator = evaluator();
        assert!(matches!(
            evaluator.decode(&Chromosome::new(vec![1, 0])),
            Err(GeneticError::ChromosomeLength { .. })
        ));
        assert!(matches!(
            evaluator.decode(&Chromosome::new(vec![1, 2, 0])),
            Err(GeneticError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_evaluate_rejects_out_of_domain_elements() {
        let solution = Solution {
            elements: vec![0, 3],
            cost: 0.0,
        };
        assert!(matches!(
            evaluator().evaluate(&solution),
            Err(GeneticError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_from_upper_triangular_mirrors() {
        let evaluator =
            QbfEvaluator::from_upper_triangular(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0]])
                .unwrap();
        assert_eq!(
            evaluator.matrix(),
            &[
                vec![1.0, 2.0, 3.0],
                vec![2.0, 4.0, 5.0],
                vec![3.0, 5.0, 6.0]
            ]
        );
    }

    #[test]
    fn test_random_chromosome_and_mutation() {
        let evaluator = evaluator();
        let mut rng = RandomNumberGenerator::from_seed(3);

        let mut chromosome = evaluator.random_chromosome(&mut rng);
        assert_eq!(chromosome.len(), 3);
        assert!(chromosome.iter().all(|&g| g <= 1));

        let before = chromosome[1];
        evaluator.mutate_gene(&mut chromosome, 1, &mut rng);
        assert_eq!(chromosome[1], 1 - before);
        evaluator.mutate_gene(&mut chromosome, 1, &mut rng);
        assert_eq!(chromosome[1], before);
    }
}

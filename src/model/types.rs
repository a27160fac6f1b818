//! The quadratic cost model.

use crate::error::{QuboError, Result};

/// A QUBO over `n` binary variables.
///
/// Energy of an assignment `x`:
///
/// ```text
/// E(x) = sum_i L[i] x_i + sum_{i<j} C[i][j] x_i x_j
/// ```
///
/// `L` is the linear (diagonal) part and `C` the coupling table. `C` is
/// stored as a full symmetric `n x n` table with a zero diagonal, so
/// `coupling(i, j) == coupling(j, i)` holds by construction.
///
/// `offset` is the constant dropped when expanding the mass penalty. It is
/// not part of [`energy`](Self::energy).
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    n: usize,
    linear: Vec<f64>,
    couplings: Vec<f64>,
    offset: f64,
}

impl CostModel {
    /// Creates an all-zero model over `n` variables.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            linear: vec![0.0; n],
            couplings: vec![0.0; n * n],
            offset: 0.0,
        }
    }

    /// Number of binary variables.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Diagonal coefficient of variable `i`.
    pub fn linear(&self, i: usize) -> f64 {
        self.linear[i]
    }

    /// Pair coefficient of `(i, j)`; zero on the diagonal.
    pub fn coupling(&self, i: usize, j: usize) -> f64 {
        self.couplings[i * self.n + j]
    }

    /// Row `i` of the coupling table.
    pub fn coupling_row(&self, i: usize) -> &[f64] {
        &self.couplings[i * self.n..(i + 1) * self.n]
    }

    /// Constant term excluded from [`energy`](Self::energy).
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn add_linear(&mut self, i: usize, value: f64) {
        self.linear[i] += value;
    }

    /// Adds `value` to the pair `(i, j)`. Both orientations are updated.
    ///
    /// # Panics
    ///
    /// Panics if `i == j`; use [`add_linear`](Self::add_linear) for the
    /// diagonal.
    pub fn add_coupling(&mut self, i: usize, j: usize, value: f64) {
        assert_ne!(i, j, "coupling on the diagonal; use add_linear");
        self.couplings[i * self.n + j] += value;
        self.couplings[j * self.n + i] += value;
    }

    pub fn add_offset(&mut self, value: f64) {
        self.offset += value;
    }

    /// Energy of `bits`, excluding the offset.
    pub fn energy(&self, bits: &[bool]) -> Result<f64> {
        self.check_len(bits)?;
        let mut energy = 0.0;
        for i in (0..self.n).filter(|&i| bits[i]) {
            energy += self.linear[i];
            let row = self.coupling_row(i);
            for j in ((i + 1)..self.n).filter(|&j| bits[j]) {
                energy += row[j];
            }
        }
        Ok(energy)
    }

    /// Local field `L[i] + sum_{j != i} C[i][j] x_j`.
    ///
    /// Flipping bit `i` changes the energy by `(1 - 2 x_i) * field`.
    pub fn local_field(&self, bits: &[bool], i: usize) -> f64 {
        let row = self.coupling_row(i);
        self.linear[i]
            + row
                .iter()
                .zip(bits)
                .filter(|&(_, &b)| b)
                .map(|(c, _)| c)
                .sum::<f64>()
    }

    /// Energy change from flipping bit `i` of `bits`.
    pub fn flip_delta(&self, bits: &[bool], i: usize) -> f64 {
        let field = self.local_field(bits, i);
        if bits[i] {
            -field
        } else {
            field
        }
    }

    /// Upper-triangular matrix: `L` on the diagonal, `C[i][j]` for `i < j`.
    pub fn upper_triangular(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| {
                (0..self.n)
                    .map(|j| match i.cmp(&j) {
                        std::cmp::Ordering::Equal => self.linear[i],
                        std::cmp::Ordering::Less => self.coupling(i, j),
                        std::cmp::Ordering::Greater => 0.0,
                    })
                    .collect()
            })
            .collect()
    }

    /// Symmetric matrix `Q` with `x^T Q x == energy(x)`.
    pub fn symmetric(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| {
                (0..self.n)
                    .map(|j| {
                        if i == j {
                            self.linear[i]
                        } else {
                            self.coupling(i, j) / 2.0
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Largest absolute local field over all assignments.
    pub fn max_abs_field(&self) -> f64 {
        (0..self.n)
            .map(|i| {
                self.linear[i].abs() + self.coupling_row(i).iter().map(|c| c.abs()).sum::<f64>()
            })
            .fold(0.0, f64::max)
    }

    /// Smallest non-zero coefficient magnitude, if any.
    pub fn min_abs_coefficient(&self) -> Option<f64> {
        self.linear
            .iter()
            .chain(&self.couplings)
            .map(|c| c.abs())
            .filter(|&c| c > 0.0)
            .reduce(f64::min)
    }

    /// First non-finite coefficient, if any.
    pub(crate) fn first_non_finite(&self) -> Option<f64> {
        self.linear
            .iter()
            .chain(&self.couplings)
            .chain(std::iter::once(&self.offset))
            .copied()
            .find(|c| !c.is_finite())
    }

    pub(crate) fn check_len(&self, bits: &[bool]) -> Result<()> {
        if bits.len() != self.n {
            return Err(QuboError::DimensionMismatch {
                expected: self.n,
                actual: bits.len(),
            });
        }
        Ok(())
    }
}

//! Square matrices parametrized by dimension.
//!
//! `Matrix4` is the transform type used throughout the renderer. The smaller
//! sizes exist because determinants are computed by cofactor expansion, which
//! recurses through them.
//!
//! Composition follows the usual column-vector convention: `(a * b) * p`
//! applies `b` first, then `a`, so `translation * rotation * point` rotates
//! and then translates.

use std::ops::Mul;

use crate::{Tuple, EPSILON};

/// An N x N matrix of reals, stored row-major.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<const N: usize> {
    m: [[f64; N]; N],
}

pub type Matrix2 = Matrix<2>;
pub type Matrix3 = Matrix<3>;
pub type Matrix4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    /// Create a matrix from its rows.
    pub const fn new(rows: [[f64; N]; N]) -> Self {
        Self { m: rows }
    }

    /// All-zero matrix.
    pub const fn zero() -> Self {
        Self { m: [[0.0; N]; N] }
    }

    pub fn identity() -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.m[i][i] = 1.0;
        }
        result
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.m[row][column]
    }

    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.m[row][column] = value;
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for row in 0..N {
            for column in 0..N {
                result.m[column][row] = self.m[row][column];
            }
        }
        result
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f64 {
        let all: Vec<usize> = (0..N).collect();
        self.determinant_over(&all, &all)
    }

    /// Determinant of the matrix with `row` and `column` removed.
    pub fn minor(&self, row: usize, column: usize) -> f64 {
        let rows: Vec<usize> = (0..N).filter(|&r| r != row).collect();
        let columns: Vec<usize> = (0..N).filter(|&c| c != column).collect();
        self.determinant_over(&rows, &columns)
    }

    /// Signed minor; negative when `row + column` is odd.
    pub fn cofactor(&self, row: usize, column: usize) -> f64 {
        let minor = self.minor(row, column);
        if (row + column) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Adjugate scaled by `1 / determinant`.
    ///
    /// Callers must check [`Matrix::is_invertible`] first; a singular matrix
    /// yields non-finite entries rather than an error.
    pub fn inverse(&self) -> Self {
        let determinant = self.determinant();
        let mut result = Self::zero();
        for row in 0..N {
            for column in 0..N {
                // transposed on write: adjugate = cofactor matrix transposed
                result.m[column][row] = self.cofactor(row, column) / determinant;
            }
        }
        result
    }

    /// Determinant of the sub-block selected by `rows` x `columns`.
    fn determinant_over(&self, rows: &[usize], columns: &[usize]) -> f64 {
        match rows.len() {
            0 => 1.0,
            1 => self.m[rows[0]][columns[0]],
            2 => {
                let (r0, r1) = (rows[0], rows[1]);
                let (c0, c1) = (columns[0], columns[1]);
                self.m[r0][c0] * self.m[r1][c1] - self.m[r0][c1] * self.m[r1][c0]
            }
            _ => {
                let top = rows[0];
                let remaining_rows = &rows[1..];
                let mut sub_columns = Vec::with_capacity(columns.len() - 1);

                let mut sum = 0.0;
                for (j, &column) in columns.iter().enumerate() {
                    sub_columns.clear();
                    sub_columns.extend(columns.iter().copied().filter(|&c| c != column));

                    let minor = self.determinant_over(remaining_rows, &sub_columns);
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    sum += self.m[top][column] * sign * minor;
                }
                sum
            }
        }
    }
}

/// `submatrix` drops one dimension, which const generics cannot express
/// generically on stable, so it is spelled out per size.
macro_rules! impl_submatrix {
    ($($n:literal => $m:literal),*) => {
        $(
            impl Matrix<$n> {
                /// Copy of this matrix with `row` and `column` removed.
                pub fn submatrix(&self, row: usize, column: usize) -> Matrix<$m> {
                    let mut result = Matrix::<$m>::zero();
                    for (dst_row, src_row) in (0..$n).filter(|&r| r != row).enumerate() {
                        for (dst_col, src_col) in (0..$n).filter(|&c| c != column).enumerate() {
                            result.m[dst_row][dst_col] = self.m[src_row][src_col];
                        }
                    }
                    result
                }
            }
        )*
    };
}

impl_submatrix!(3 => 2, 4 => 3);

impl<const N: usize> PartialEq for Matrix<N> {
    fn eq(&self, other: &Self) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: Matrix<N>) -> Matrix<N> {
        let mut result = Matrix::zero();
        for row in 0..N {
            for column in 0..N {
                result.m[row][column] = (0..N).map(|k| self.m[row][k] * rhs.m[k][column]).sum();
            }
        }
        result
    }
}

impl Mul<Tuple> for Matrix4 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        let row = |r: usize| (0..4).map(|k| self.m[r][k] * rhs.component(k)).sum::<f64>();
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

//! 4x4 matrix value type and operations

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Absolute per-entry tolerance used by [`Matrix4x4::approx_eq`].
///
/// Direct `==` comparison is unreliable for matrices derived from
/// floating-point arithmetic, so equality is always tolerance-based.
pub const COMPARE_TOLERANCE: f32 = 0.001;

/// Pivot magnitude below which a matrix is treated as singular during
/// Gauss-Jordan elimination.
pub const PIVOT_EPSILON: f32 = 1e-6;

/// 4x4 matrix of `f32` entries, row-major, addressed `(row, col)`.
///
/// A plain `Copy` value type: every operation takes its operands by
/// value and returns a fresh matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    /// All-zero matrix
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix: 1.0 on the main diagonal, 0.0 elsewhere
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from row-major entries
    #[inline]
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Identity constructor, equivalent to [`Matrix4x4::IDENTITY`]
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Transpose: `result(i,j) = self(j,i)`
    #[inline]
    pub fn transpose(self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Tolerance-based equality: true iff every corresponding entry pair
    /// differs by at most `tolerance` in absolute value.
    pub fn approx_eq_within(self, other: Self, tolerance: f32) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (self.m[i][j] - other.m[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Tolerance-based equality with the default [`COMPARE_TOLERANCE`]
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_within(other, COMPARE_TOLERANCE)
    }

    /// Multiplicative inverse via Gauss-Jordan elimination, or `None` if
    /// a near-zero pivot is encountered.
    ///
    /// Pivots are taken from the diagonal in order; there is no row
    /// swapping. A matrix that is invertible in exact arithmetic can
    /// still come back `None` here if elimination leaves a value below
    /// [`PIVOT_EPSILON`] on the diagonal.
    pub fn try_inverse(self) -> Option<Self> {
        let mut working = self;
        let mut result = Self::IDENTITY;

        for i in 0..4 {
            let pivot = working.m[i][i];
            if pivot.abs() < PIVOT_EPSILON {
                return None;
            }

            // Normalize the pivot row in both matrices
            for j in 0..4 {
                working.m[i][j] /= pivot;
                result.m[i][j] /= pivot;
            }

            // Eliminate column i from every other row
            for r in 0..4 {
                if r == i {
                    continue;
                }
                let factor = working.m[r][i];
                for j in 0..4 {
                    working.m[r][j] -= factor * working.m[i][j];
                    result.m[r][j] -= factor * result.m[i][j];
                }
            }
        }

        Some(result)
    }

    /// Multiplicative inverse, with the identity matrix as a silent
    /// sentinel for the singular case.
    ///
    /// Callers cannot distinguish "input was the identity" from "input
    /// was singular" through the return value alone; use
    /// [`Matrix4x4::try_inverse`] when that distinction matters.
    #[inline]
    pub fn inverse(self) -> Self {
        self.try_inverse().unwrap_or(Self::IDENTITY)
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    #[inline]
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.m[row][col]
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        result
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        result
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    /// Row-by-column product: `result(i,j) = Σ_k self(i,k) * rhs(k,j)`
    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        result
    }
}

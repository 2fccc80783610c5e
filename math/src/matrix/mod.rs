// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A dense matrix over the Curve25519 base field.
//!
//! Elements are stored in a single row-major vector. Matrices are immutable after
//! construction except through [Matrix::set]; all arithmetic returns fresh values. The
//! element-wise operations compose from the constant-time field primitives; matrix
//! multiplication and the determinant are variable-time and are only ever applied to public
//! data (MDS construction and round-constant checks).

use alloc::{string::String, vec::Vec};

use crate::{fields::f25519::BaseElement, MathError, U256};


// MATRIX
// ================================================================================================

/// A row-major matrix of field elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<BaseElement>,
}

impl Matrix {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new matrix of the specified dimensions with all elements set to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![BaseElement::ZERO; rows * cols],
        }
    }

    /// Returns a new matrix built from a vector of rows.
    ///
    /// # Errors
    /// Returns an error if the rows do not all have the same number of columns.
    pub fn from_rows(rows: Vec<Vec<BaseElement>>) -> Result<Self, MathError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.len());

        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(MathError::InvalidInput(format!(
                    "all rows must have the same number of columns; expected {num_cols}, but \
                     found {}",
                    row.len()
                )));
            }
            data.extend_from_slice(&row);
        }

        Ok(Matrix { rows: num_rows, cols: num_cols, data })
    }

    /// Returns a column vector (an n x 1 matrix) built from the provided elements.
    pub fn from_column(elements: Vec<BaseElement>) -> Self {
        Matrix {
            rows: elements.len(),
            cols: 1,
            data: elements,
        }
    }

    /// Returns an identity matrix of the specified size.
    pub fn identity(size: usize) -> Self {
        let mut result = Matrix::new(size, size);
        for i in 0..size {
            result.data[i * size + i] = BaseElement::ONE;
        }
        result
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of rows in this matrix.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in this matrix.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if this matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if this matrix contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at the specified row and column.
    ///
    /// # Errors
    /// Returns an error if either index is beyond the matrix dimensions.
    pub fn get(&self, row: usize, col: usize) -> Result<BaseElement, MathError> {
        self.check_bounds(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Sets the element at the specified row and column.
    ///
    /// # Errors
    /// Returns an error if either index is beyond the matrix dimensions.
    pub fn set(&mut self, row: usize, col: usize, value: BaseElement) -> Result<(), MathError> {
        self.check_bounds(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a copy of the specified row.
    ///
    /// # Errors
    /// Returns an error if the row index is beyond the matrix dimensions.
    pub fn row(&self, row: usize) -> Result<Vec<BaseElement>, MathError> {
        if row >= self.rows {
            return Err(MathError::IndexOutOfRange(format!(
                "row index {row} is out of range for a matrix with {} rows",
                self.rows
            )));
        }
        Ok(self.data[row * self.cols..(row + 1) * self.cols].to_vec())
    }

    /// Returns a copy of the specified column.
    ///
    /// # Errors
    /// Returns an error if the column index is beyond the matrix dimensions.
    pub fn col(&self, col: usize) -> Result<Vec<BaseElement>, MathError> {
        if col >= self.cols {
            return Err(MathError::IndexOutOfRange(format!(
                "column index {col} is out of range for a matrix with {} columns",
                self.cols
            )));
        }
        Ok((0..self.rows).map(|row| self.data[row * self.cols + col]).collect())
    }

    /// Returns the underlying elements in row-major order.
    pub fn elements(&self) -> &[BaseElement] {
        &self.data
    }

    /// Consumes a column vector and returns its elements.
    ///
    /// # Errors
    /// Returns an error if this matrix has more than one column.
    pub fn into_column_vec(self) -> Result<Vec<BaseElement>, MathError> {
        if self.cols != 1 {
            return Err(MathError::InvalidInput(format!(
                "expected a column vector, but the matrix has {} columns",
                self.cols
            )));
        }
        Ok(self.data)
    }

    // ARITHMETIC
    // --------------------------------------------------------------------------------------------

    /// Returns the product of this matrix and the right-hand-side matrix.
    ///
    /// The accumulation is an ordinary sum; matrix products in this suite involve at least one
    /// public operand, so a variable-time accumulator is acceptable.
    ///
    /// # Errors
    /// Returns an error if the matrix shapes are incompatible.
    pub fn mat_mul(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != rhs.rows {
            return Err(MathError::DimensionMismatch(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let mut result = Matrix::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = BaseElement::ZERO;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                result.data[i * rhs.cols + j] = sum;
            }
        }

        Ok(result)
    }

    /// Returns the element-wise sum of this matrix and the right-hand-side matrix, using the
    /// constant-time field addition.
    ///
    /// # Errors
    /// Returns an error if the matrix shapes differ.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        self.check_same_shape(rhs, "addition")?;
        let data = self.data.iter().zip(rhs.data.iter()).map(|(&a, &b)| a + b).collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Returns the element-wise difference of this matrix and the right-hand-side matrix,
    /// using the constant-time field subtraction.
    ///
    /// # Errors
    /// Returns an error if the matrix shapes differ.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        self.check_same_shape(rhs, "subtraction")?;
        let data = self.data.iter().zip(rhs.data.iter()).map(|(&a, &b)| a - b).collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Returns a matrix with every element raised to the specified power via the
    /// constant-time exponentiation ladder.
    pub fn pow(&self, exp: &U256) -> Matrix {
        let data = self.data.iter().map(|element| element.exp(exp)).collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Returns a matrix with every element raised to the fifth power via the fast S-box path.
    pub fn pow5(&self) -> Matrix {
        let data = self.data.iter().map(|element| element.pow5()).collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Returns a matrix with every element multiplied by the specified scalar.
    pub fn scalar_mul(&self, scalar: BaseElement) -> Matrix {
        let data = self.data.iter().map(|&element| element * scalar).collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    // DETERMINANT
    // --------------------------------------------------------------------------------------------

    /// Computes the determinant via partitioned Gaussian elimination.
    ///
    /// At each column the surviving rows are split into those with a zero leading element and
    /// those without. If no row has a non-zero leading element the determinant is zero.
    /// Otherwise the first non-zero-leading row becomes the pivot, the running determinant is
    /// multiplied by its pivot value, the pivot row is normalized, and the pivot is eliminated
    /// from the remaining non-zero-leading rows. The pivot column is then dropped from every
    /// surviving row and the process repeats on the narrower submatrix.
    ///
    /// The pivot choice is deterministic but the intermediate determinant factors depend on
    /// the row order; only the final product is invariant. This procedure is variable-time and
    /// must only be used on public inputs (it runs once per descriptor construction).
    ///
    /// # Errors
    /// Returns an error if this matrix is empty or not square.
    pub fn det(&self) -> Result<BaseElement, MathError> {
        if !self.is_square() {
            return Err(MathError::InvalidInput(format!(
                "determinant requires a square matrix, but the matrix is {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows == 0 {
            return Err(MathError::InvalidInput(String::from(
                "determinant requires a non-empty matrix",
            )));
        }
        if self.rows == 1 {
            return Ok(self.data[0]);
        }

        let mut rows_data: Vec<Vec<BaseElement>> =
            (0..self.rows).map(|i| self.data[i * self.cols..(i + 1) * self.cols].to_vec()).collect();

        let mut det_value = BaseElement::ONE;

        for _ in 0..self.cols {
            // partition into rows with and without a leading zero
            let mut lz_rows = Vec::new();
            let mut nlz_rows = Vec::new();
            for row in rows_data.drain(..) {
                if row[0] == BaseElement::ZERO {
                    lz_rows.push(row);
                } else {
                    nlz_rows.push(row);
                }
            }

            // no pivot row means rank < n
            if nlz_rows.is_empty() {
                return Ok(BaseElement::ZERO);
            }

            let pivot_row = nlz_rows.remove(0);
            let pivot = pivot_row[0];
            det_value *= pivot;

            // pivot is non-zero, so inversion cannot fail
            let pivot_inv = pivot.inv()?;
            let normalized: Vec<BaseElement> =
                pivot_row.iter().map(|&value| value * pivot_inv).collect();

            // eliminate the pivot from the remaining non-zero-leading rows, then drop the
            // pivot column from every surviving row
            for row in nlz_rows {
                let lead = row[0];
                if row.len() > 1 {
                    let reduced: Vec<BaseElement> = row
                        .iter()
                        .zip(normalized.iter())
                        .skip(1)
                        .map(|(&value, &norm)| value - lead * norm)
                        .collect();
                    rows_data.push(reduced);
                }
            }
            for row in lz_rows {
                if row.len() > 1 {
                    rows_data.push(row[1..].to_vec());
                }
            }
        }

        Ok(det_value)
    }

    // HELPER FUNCTIONS
    // --------------------------------------------------------------------------------------------

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MathError> {
        if row >= self.rows || col >= self.cols {
            return Err(MathError::IndexOutOfRange(format!(
                "index ({row}, {col}) is out of range for a {}x{} matrix",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    fn check_same_shape(&self, rhs: &Matrix, operation: &str) -> Result<(), MathError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MathError::DimensionMismatch(format!(
                "matrix shapes must match for {operation}, but they are {}x{} and {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        Ok(())
    }
}

use std::{error::Error, fmt::Display};

use nalgebra::{DMatrix, DVector};

use crate::grid::Grid;

/// Fills a pre-zeroed `(n+1) x (m+1)` table `c` with finite difference weights for the
/// grid `x` of n+1 points at evaluation point `z`. After the call, `c[(i, k)]` is the
/// weight of sample i when approximating the k-th derivative at `z`; derivative orders
/// the point count cannot resolve are left at zero.
///
/// Uses the recurrence of Fornberg, "Generation of Finite Difference Formulas on
/// Arbitrarily Spaced Grids" (Math. Comp. 51, 1988). Each outer iteration appends one
/// grid point: it fills the new row from the previous one and re-ages every earlier row
/// in place to account for the added point.
///
/// Grid distinctness is not checked here. A repeated abscissa divides by zero and the
/// resulting non-finite value propagates silently into the table; [WeightTable::new]
/// goes through [Grid] and rejects such input up front.
/// # Errors
/// Error is returned when `x` is empty or when `c` does not have shape
/// `(x.len(), m + 1)`.
pub fn fill_weights(x: &[f64], m: usize, z: f64, c: &mut DMatrix<f64>) -> Result<(), Box<dyn Error>> {
    if x.is_empty() {
        return Err(Box::new(WeightsError("grid must have at least 1 point".to_string())));
    }
    if c.nrows() != x.len() || c.ncols() != m + 1 {
        return Err(Box::new(WeightsError(format!(
            "table shape is {}x{} while {}x{} is required",
            c.nrows(),
            c.ncols(),
            x.len(),
            m + 1
        ))));
    }

    let n = x.len() - 1;
    let mut dx_prod_old = 1.0;
    let mut dz = x[0] - z;
    c[(0, 0)] = 1.0;

    for i in 1..=n {
        let mn = i.min(m);
        let mut dx_prod = 1.0;
        let dz_old = dz;
        dz = x[i] - z;

        for j in 0..i {
            let dx = x[i] - x[j];
            dx_prod *= dx;

            if j == i - 1 {
                // new row, built from row i-1 before that row is aged below
                for k in (1..=mn).rev() {
                    c[(i, k)] =
                        (k as f64 * c[(i - 1, k - 1)] - dz_old * c[(i - 1, k)]) * dx_prod_old / dx_prod;
                }
                c[(i, 0)] = -dz_old * c[(i - 1, 0)] * dx_prod_old / dx_prod;
            }

            // age row j in place to account for the point x[i]
            for k in (1..=mn).rev() {
                c[(j, k)] = (dz * c[(j, k)] - k as f64 * c[(j, k - 1)]) / dx;
            }
            c[(j, 0)] = dz * c[(j, 0)] / dx;
        }

        dx_prod_old = dx_prod;
    }

    Ok(())
}

/// Table of finite difference weights for one grid and one evaluation point.
/// Row i holds the weights of sample i, column k the stencil for the k-th derivative.
pub struct WeightTable {
    c: DMatrix<f64>,
    max_order: usize,
    z: f64,
}

impl WeightTable {
    /// Computes the weight table for `grid` at evaluation point `z`, covering derivative
    /// orders 0 up to `max_order`. Orders beyond what the point count can resolve are
    /// not an error; their columns stay zero.
    /// # Example
    /// ```
    /// use finite_difference::{Grid, WeightTable};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let grid = Grid::new(vec![0.0, 1.0, 2.0]).unwrap();
    /// let table = WeightTable::new(&grid, 1, 0.0).unwrap();
    ///
    /// let first = table.order_weights(1);
    /// assert_approx_eq!(-1.5, first[0], 1e-12);
    /// assert_approx_eq!(2.0, first[1], 1e-12);
    /// assert_approx_eq!(-0.5, first[2], 1e-12);
    /// ```
    pub fn new(grid: &Grid, max_order: usize, z: f64) -> Result<Self, Box<dyn Error>> {
        let mut c = DMatrix::<f64>::zeros(grid.len(), max_order + 1);
        fill_weights(grid.points(), max_order, z, &mut c)?;

        Ok(WeightTable { c, max_order, z })
    }

    /// Weight of sample `point` for derivative order `order`.
    pub fn weight(&self, point: usize, order: usize) -> f64 {
        self.c[(point, order)]
    }

    /// Weights of all samples for derivative order `order`, i.e. the stencil that
    /// approximates the `order`-th derivative at the evaluation point.
    pub fn order_weights(&self, order: usize) -> Vec<f64> {
        self.c.column(order).iter().copied().collect()
    }

    /// Approximates the `order`-th derivative at the evaluation point from function
    /// values sampled on the grid.
    /// # Errors
    /// Error is returned when `values` length differs from the number of grid points
    /// or when `order` exceeds the table's maximum order.
    pub fn apply(&self, values: &[f64], order: usize) -> Result<f64, Box<dyn Error>> {
        if values.len() != self.c.nrows() {
            return Err(Box::new(WeightsError(format!(
                "{} function values given for {} grid points",
                values.len(),
                self.c.nrows()
            ))));
        }
        if order > self.max_order {
            return Err(Box::new(WeightsError(format!(
                "derivative order {} exceeds table maximum {}",
                order, self.max_order
            ))));
        }

        let values = DVector::<f64>::from_column_slice(values);
        Ok(self.c.column(order).dot(&values))
    }

    pub fn num_points(&self) -> usize {
        self.c.nrows()
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

#[derive(Debug)]
struct WeightsError(String);

impl Display for WeightsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in weights: {}", self.0)
    }
}

impl Error for WeightsError {}

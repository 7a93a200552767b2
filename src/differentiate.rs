use std::{error::Error, fmt::Display};

use nalgebra::DMatrix;

use crate::{grid::Grid, weights::fill_weights};

/// Approximates the `order`-th derivative of a sampled function at every grid point.
/// For each point a window of `stencil` consecutive grid points centered on it (clamped
/// at the grid ends) is used: uneven finite difference weights are computed for that
/// window with the point itself as evaluation point and applied to the windowed values.
/// # Example
/// ```
/// use finite_difference::{finite_difference, Grid};
/// use assert_approx_eq::assert_approx_eq;
///
/// let grid = Grid::uniform(0.0, 0.1, 11).unwrap();
/// let values: Vec<f64> = grid.points().iter().map(|x| x * x).collect();
///
/// let derivative = finite_difference(&grid, &values, 1, 3).unwrap();
///
/// assert_approx_eq!(0.0, derivative[0], 1e-10);
/// assert_approx_eq!(1.0, derivative[5], 1e-10);
/// assert_approx_eq!(2.0, derivative[10], 1e-10);
/// ```
/// # Errors
/// Error is returned when `values` length differs from the number of grid points, when
/// `stencil` is too short to resolve `order` (fewer than `order + 1` points) or when
/// `stencil` exceeds the number of grid points.
pub fn finite_difference(
    grid: &Grid,
    values: &[f64],
    order: usize,
    stencil: usize,
) -> Result<Vec<f64>, Box<dyn Error>> {
    let x = grid.points();

    if values.len() != x.len() {
        return Err(Box::new(FiniteDifferenceError(format!(
            "{} function values given for {} grid points",
            values.len(),
            x.len()
        ))));
    }
    if stencil < order + 1 {
        return Err(Box::new(FiniteDifferenceError(format!(
            "stencil of {} points cannot resolve derivative order {}",
            stencil, order
        ))));
    }
    if stencil > x.len() {
        return Err(Box::new(FiniteDifferenceError(format!(
            "stencil of {} points exceeds grid of {} points",
            stencil,
            x.len()
        ))));
    }

    let mut results = Vec::with_capacity(x.len());
    let mut c = DMatrix::<f64>::zeros(stencil, order + 1);

    for p in 0..x.len() {
        let start = p.saturating_sub(stencil / 2).min(x.len() - stencil);
        let window = &x[start..start + stencil];

        c.fill(0.0);
        fill_weights(window, order, x[p], &mut c)?;

        let mut result = 0.0;
        for (i, value) in values[start..start + stencil].iter().enumerate() {
            result += c[(i, order)] * value;
        }
        results.push(result);
    }

    Ok(results)
}

#[derive(Debug)]
struct FiniteDifferenceError(String);

impl Display for FiniteDifferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in finite difference: {}", self.0)
    }
}

impl Error for FiniteDifferenceError {}

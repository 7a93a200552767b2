//! Library computing finite difference weights on arbitrarily spaced one-dimensional
//! grids, using the recurrence of Fornberg. Weights are produced for all derivative
//! orders up to a requested maximum at an arbitrary evaluation point, which does not
//! have to lie on the grid.
//!
//! # Example
//! ```
//! use finite_difference::{Grid, WeightTable};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let grid = Grid::new(vec![0.0, 0.5, 2.0]).unwrap();
//! let table = WeightTable::new(&grid, 1, 0.8).unwrap();
//!
//! // order 0 weights are the Lagrange basis at the evaluation point
//! assert_approx_eq!(-0.36, table.weight(0, 0), 1e-12);
//! assert_approx_eq!(1.28, table.weight(1, 0), 1e-12);
//! assert_approx_eq!(0.08, table.weight(2, 0), 1e-12);
//! ```

mod differentiate;
mod grid;
mod weights;

pub use differentiate::finite_difference;
pub use grid::Grid;
pub use weights::{fill_weights, WeightTable};

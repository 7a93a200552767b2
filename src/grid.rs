use std::{error::Error, fmt::Display};

/// Grid represents the ordered sequence of sample abscissas on which finite difference
/// weights are computed. Points are kept in the order given by the caller; rows of the
/// weight table follow that order.
/// - `points` - sample x coordinates, all distinct,
/// - `is_uniform` - whether spacing between consecutive (sorted) points is constant.
pub struct Grid {
    points: Vec<f64>,
    is_uniform: bool,
}

impl Grid {
    /// Creates [Grid] from a vector of sample abscissas.
    /// # Example
    /// ```
    /// use finite_difference::Grid;
    ///
    /// let grid = Grid::new(vec![0.0, 0.4, 1.0, 2.5]);
    /// assert!(grid.is_ok());
    /// ```
    /// # Errors
    /// Error is returned when `points` is empty or when two abscissas coincide.
    /// ```
    /// use finite_difference::Grid;
    ///
    /// let grid = Grid::new(vec![0.0, 1.0, 1.0]);
    /// assert!(grid.is_err());
    /// ```
    pub fn new(points: Vec<f64>) -> Result<Self, Box<dyn Error>> {
        if points.is_empty() {
            return Err(Box::new(GridError("Grid must have at least 1 point".to_string())));
        }

        let mut sorted_points = points.clone();
        sorted_points.sort_by(|a, b| a.total_cmp(b));

        let spacing_vec: Vec<f64> = sorted_points
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();

        if spacing_vec.iter().any(|spacing| *spacing < 1e-16) {
            return Err(Box::new(GridError("Grid points have equal x values".to_string())));
        }

        let is_uniform = spacing_vec
            .windows(2)
            .map(|spacing| (spacing[1] - spacing[0]).abs())
            .all(|difference| difference < 1e-16);

        Ok(Grid { points, is_uniform })
    }

    /// Simplified method to create [Grid] of `count` equispaced points starting at `start`.
    /// # Errors
    /// Error is returned when `count` is 0 or `step` is (numerically) 0.
    pub fn uniform(start: f64, step: f64, count: usize) -> Result<Self, Box<dyn Error>> {
        if count == 0 {
            return Err(Box::new(GridError("Grid must have at least 1 point".to_string())));
        }
        if step.abs() < 1e-16 {
            return Err(Box::new(GridError("Grid step must be non-zero".to_string())));
        }

        let points = (0..count).map(|i| start + step * i as f64).collect();
        Ok(Grid { points, is_uniform: true })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_uniform(&self) -> bool {
        self.is_uniform
    }
}

#[derive(Debug)]
struct GridError(String);

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Grid: {}", self.0)
    }
}

impl Error for GridError {}

//! # Graph
//!
//! The solver's read-only input: a vertex count and a dense, symmetric distance
//! matrix. Graphs built from points also keep the vertex positions so a downstream
//! renderer can draw the tours streamed by the solver.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::graph::Graph;
//!
//! let graph = Graph::from_positions(vec![[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]]);
//! assert_eq!(graph.distance(0, 2), 5.0);
//! assert_eq!(graph.tour_length(&[0, 1, 2]), 12.0);
//! ```

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Smallest vertex count produced by [`Graph::random_default`].
pub const MIN_VERTICES: usize = 10;

/// Largest vertex count produced by [`Graph::random_default`].
pub const MAX_VERTICES: usize = 40;

/// Side length of the square random vertices are placed in.
pub const MAX_EXTENT: f64 = 800.0;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A point in the plane.
pub type Position = [f64; 2];

/// A complete weighted graph stored as a row-major distance matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    vertices: usize,
    positions: Vec<Position>,
    distances: Vec<f64>,
}

impl Graph {
    /// Builds a graph whose edge weights are the Euclidean distances between points.
    pub fn from_positions(positions: Vec<Position>) -> Self {
        let vertices = positions.len();
        let mut distances = vec![0.0; vertices * vertices];
        for (i, a) in positions.iter().enumerate() {
            for (j, b) in positions.iter().enumerate() {
                distances[i * vertices + j] = (a[0] - b[0]).hypot(a[1] - b[1]);
            }
        }

        Self {
            vertices,
            positions,
            distances,
        }
    }

    /// Builds a graph from an explicit distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidGraph`] if the matrix is not square, contains a
    /// negative or non-finite entry, or is not symmetric.
    pub fn from_matrix(matrix: Vec<Vec<f64>>) -> Result<Self> {
        let vertices = matrix.len();
        let mut distances = Vec::with_capacity(vertices * vertices);

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != vertices {
                return Err(GeneticError::InvalidGraph(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    vertices
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(GeneticError::InvalidGraph(format!(
                        "distance ({}, {}) = {} is not a non-negative number",
                        i, j, d
                    )));
                }
            }
            distances.extend_from_slice(row);
        }

        for i in 0..vertices {
            for j in (i + 1)..vertices {
                if (matrix[i][j] - matrix[j][i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(GeneticError::InvalidGraph(format!(
                        "distance ({}, {}) = {} differs from ({}, {}) = {}",
                        i, j, matrix[i][j], j, i, matrix[j][i]
                    )));
                }
            }
        }

        Ok(Self {
            vertices,
            positions: Vec::new(),
            distances,
        })
    }

    /// Places a random number of vertices, drawn from `[min_count, max_count]`,
    /// uniformly in the square `[0, extent)²`.
    pub fn random(
        rng: &mut RandomNumberGenerator,
        min_count: usize,
        max_count: usize,
        extent: f64,
    ) -> Self {
        debug_assert!(min_count <= max_count);
        let count = min_count + rng.below(max_count - min_count + 1);
        let positions = (0..count)
            .map(|_| [rng.uniform() * extent, rng.uniform() * extent])
            .collect();
        Self::from_positions(positions)
    }

    /// [`Graph::random`] with [`MIN_VERTICES`], [`MAX_VERTICES`] and [`MAX_EXTENT`].
    pub fn random_default(rng: &mut RandomNumberGenerator) -> Self {
        Self::random(rng, MIN_VERTICES, MAX_VERTICES, MAX_EXTENT)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    /// Vertex positions, empty when the graph was built from a bare matrix.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.vertices + to]
    }

    /// Total length of the closed tour visiting `order` and returning to its start.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        (0..n)
            .map(|i| self.distance(order[i], order[(i + 1) % n]))
            .sum()
    }

    /// The edges of the closed tour visiting `order`, as `(from, to)` vertex pairs.
    pub fn edges(&self, order: &[usize]) -> Vec<(usize, usize)> {
        let n = order.len();
        (0..n).map(|i| (order[i], order[(i + 1) % n])).collect()
    }
}

// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of the SimBox structure and its methods.

use float_cmp::approx_eq;
use nalgebra::base::{Matrix3, Vector3};

/// Box vectors of the simulation cell stored as a 3×3 matrix.
/// Row `i` is the `i`-th box vector. Gro files only populate the diagonal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimBox(pub(crate) Matrix3<f32>);

impl From<[f32; 3]> for SimBox {
    /// Convert 3-member array to a diagonal SimBox. Off-diagonal elements are set to 0.
    fn from(arr: [f32; 3]) -> Self {
        SimBox(Matrix3::from_diagonal(&Vector3::new(arr[0], arr[1], arr[2])))
    }
}

impl From<Matrix3<f32>> for SimBox {
    fn from(matrix: Matrix3<f32>) -> Self {
        SimBox(matrix)
    }
}

impl SimBox {
    /// Length of the box along x (the first diagonal element).
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[(0, 0)]
    }

    /// Length of the box along y (the second diagonal element).
    #[inline]
    pub fn y(&self) -> f32 {
        self.0[(1, 1)]
    }

    /// Length of the box along z (the third diagonal element).
    #[inline]
    pub fn z(&self) -> f32 {
        self.0[(2, 2)]
    }

    /// Get the full box matrix.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix3<f32> {
        &self.0
    }

    /// Returns `true` if all off-diagonal elements are zero.
    pub fn is_diagonal(&self) -> bool {
        (0..3)
            .flat_map(|i| (0..3).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .all(|(i, j)| approx_eq!(f32, self.0[(i, j)], 0.0))
    }

    /// Returns `true` if all elements of the box are zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }
}

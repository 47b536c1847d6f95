// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of functions for reading and writing structure files.

pub mod gro_io;

use crate::structures::vector3d::Vector3D;

/// Check that all vectors have components inside the closed interval `[min, max]`.
pub(crate) fn check_coordinate_sizes(vectors: &[Vector3D], min: f32, max: f32) -> bool {
    vectors.iter().all(|vector| vector.is_within(min, max))
}

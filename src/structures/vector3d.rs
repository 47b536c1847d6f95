// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of a three-dimensional vector used for positions and velocities.

use std::ops::{Deref, DerefMut};

use nalgebra::base::Vector3;

/// Position of a point in space or velocity of an atom.
/// Implemented using `nalgebra`'s Vector3.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D(pub(crate) Vector3<f32>);

impl From<[f32; 3]> for Vector3D {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Vector3D(Vector3::new(arr[0], arr[1], arr[2]))
    }
}

impl From<Vector3<f32>> for Vector3D {
    #[inline]
    fn from(vec: Vector3<f32>) -> Self {
        Vector3D(vec)
    }
}

/// Allows accessing fields of `Vector3D` as `.x`, `.y`, and `.z`.
#[repr(C)]
pub struct Vector3Raw {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Deref for Vector3D {
    type Target = Vector3Raw;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // `Vector3<f32>` stores its three components contiguously
        unsafe { &*(self.0.as_ptr() as *const Vector3Raw) }
    }
}

impl DerefMut for Vector3D {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *(self.0.as_mut_ptr() as *mut Vector3Raw) }
    }
}

impl Vector3D {
    /// Create a new `Vector3D` structure.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3D(Vector3::new(x, y, z))
    }

    /// Get the underlying `nalgebra` vector.
    #[inline]
    pub fn as_nalgebra(&self) -> &Vector3<f32> {
        &self.0
    }

    /// Check that all components of the vector lie inside the closed interval `[min, max]`.
    #[inline]
    pub fn is_within(&self, min: f32, max: f32) -> bool {
        self.0.iter().all(|&c| c >= min && c <= max)
    }
}

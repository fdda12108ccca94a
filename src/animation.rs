//! Per-frame animation of the ship and the spinner.
//!
//! Two scalars are integrated with `value += rate * dt` every frame and both
//! model matrices are rebuilt from scratch from them. Nothing accumulates in
//! the matrices themselves.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

use crate::config::SceneConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    /// Horizontal ship offset in world units.
    pub offset: f32,
    /// Spinner rotation about z.
    pub angle: Deg<f32>,
    pub speed: f32,
    pub spin_rate: Deg<f32>,
    pub pivot: Vector3<f32>,
    /// Ship model matrix for the current frame.
    pub translate: Matrix4<f32>,
    /// Spinner model matrix for the current frame.
    pub rotate: Matrix4<f32>,
}

impl Animation {
    pub fn new(speed: f32, spin_rate: Deg<f32>, pivot: Vector3<f32>) -> Self {
        Self {
            offset: 0.0,
            angle: Deg(0.0),
            speed,
            spin_rate,
            pivot,
            translate: Matrix4::identity(),
            rotate: Matrix4::identity(),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let pivot = config
            .spinner
            .as_ref()
            .map_or([0.0; 3], |spinner| spinner.pivot);
        Self::new(config.ship_speed, config.spin_rate, pivot.into())
    }

    /// Advance by `dt` seconds. Large steps are taken as they come.
    pub fn update(&mut self, dt: f32) {
        self.offset += self.speed * dt;
        self.angle += self.spin_rate * dt;

        self.translate = translation(self.offset);
        self.rotate = pivot_rotation(self.pivot, self.angle);
    }
}

/// `T(offset, 0, 0)`, no rotation.
pub fn translation(offset: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(offset, 0.0, 0.0))
}

/// `T(pivot) * Rz(angle)`: rotate in place, then move to the pivot.
pub fn pivot_rotation(pivot: Vector3<f32>, angle: Deg<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(pivot) * Matrix4::from_angle_z(angle)
}

//! Scene configuration.
//!
//! Every fixed value of the scene lives here: window, colours, projection
//! bounds, asset paths and animation rates. There are no command line flags;
//! a demo picks a [`SceneConfig`] and hands it to [`crate::flow::run`].

use cgmath::Deg;

/// Orthographic projection bounds in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ortho {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Ortho {
    /// The projection in OpenGL clip space.
    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::ortho(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

impl Default for Ortho {
    fn default() -> Self {
        Self {
            left: -5.0,
            right: 5.0,
            bottom: -3.75,
            top: 3.75,
            near: -1.0,
            far: 1.0,
        }
    }
}

/// Vertex and fragment source files for both shader programs, relative to
/// the asset directory.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderPaths {
    pub flat_vertex: String,
    pub flat_fragment: String,
    pub textured_vertex: String,
    pub textured_fragment: String,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            flat_vertex: "shaders/vertex.wgsl".into(),
            flat_fragment: "shaders/fragment.wgsl".into(),
            textured_vertex: "shaders/vertex_textured.wgsl".into(),
            textured_fragment: "shaders/fragment_textured.wgsl".into(),
        }
    }
}

/// The optional sprite that spins around a fixed pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinnerConfig {
    pub texture: String,
    /// Offset of the rotation centre. Chosen so the spinner clears the ship.
    pub pivot: [f32; 3],
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            texture: "Aang.png".into(),
            pivot: [-3.5, 3.0, 0.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    pub sea_colour: [f32; 4],
    pub sprite_tint: [f32; 4],
    pub projection: Ortho,
    pub view: cgmath::Matrix4<f32>,
    pub shaders: ShaderPaths,
    pub ship_texture: String,
    pub spinner: Option<SpinnerConfig>,
    /// Horizontal ship speed in world units per second.
    pub ship_speed: f32,
    /// Spinner rotation per second.
    pub spin_rate: Deg<f32>,
}

impl SceneConfig {
    /// Sea, ship and the spinning sprite.
    pub fn encounter() -> Self {
        Self {
            spinner: Some(SpinnerConfig::default()),
            ..Default::default()
        }
    }
}

impl Default for SceneConfig {
    /// Sea and ship only.
    fn default() -> Self {
        use cgmath::SquareMatrix;

        Self {
            title: "TwoDScene".into(),
            width: 640,
            height: 480,
            clear_colour: wgpu::Color {
                r: 0.2,
                g: 0.2,
                b: 0.2,
                a: 1.0,
            },
            sea_colour: [0.0, 0.0, 1.0, 1.0],
            sprite_tint: [1.0, 1.0, 1.0, 1.0],
            projection: Ortho::default(),
            view: cgmath::Matrix4::identity(),
            shaders: ShaderPaths::default(),
            ship_texture: "FireNation.png".into(),
            spinner: None,
            ship_speed: 1.0,
            spin_rate: Deg(45.0),
        }
    }
}

//! Constant vertex data for every quad in the scene.
//!
//! Each quad is two triangles, six 2D positions in world units. Textured
//! quads share [`TEX_COORDS`]. The arrays are uploaded once into
//! [`QuadMesh`] vertex buffers and never touched again.

use wgpu::util::DeviceExt;

pub const QUAD_VERTEX_COUNT: u32 = 6;

pub type Positions = [[f32; 2]; QUAD_VERTEX_COUNT as usize];

/// The flat sea band across the bottom of the view.
pub const SEA: Positions = [
    [-5.0, -1.0],
    [-5.0, -3.75],
    [5.0, -1.0],
    [5.0, -1.0],
    [-5.0, -3.75],
    [5.0, -3.75],
];

/// The ship, starting off the left edge with its bow at the origin.
pub const SHIP: Positions = [
    [-5.0, -1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [-5.0, -1.0],
    [0.0, 1.0],
    [-5.0, 1.0],
];

/// The spinning sprite, centred on its own origin so it turns in place.
pub const SPINNER: Positions = [
    [-0.75, -0.75],
    [0.75, -0.75],
    [0.75, 0.75],
    [-0.75, -0.75],
    [0.75, 0.75],
    [-0.75, 0.75],
];

/// Texture coordinates matching the corner order of [`SHIP`] and [`SPINNER`].
/// `v` grows downwards, so the first image row lands at the top edge.
pub const TEX_COORDS: Positions = [
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [0.0, 0.0],
];

/// A vertex buffer of six 2D vectors, bound to one attribute slot.
#[derive(Debug)]
pub struct QuadMesh {
    pub buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl QuadMesh {
    pub fn new(device: &wgpu::Device, data: &Positions, label: &str) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count: QUAD_VERTEX_COUNT,
        }
    }
}

#![allow(dead_code)]

use twod_scene::flow::Frame;

/// A frame that records every call instead of touching a GPU.
pub(crate) struct Recorder {
    deltas: Vec<f32>,
    render_invocations: u32,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            deltas: Vec::new(),
            render_invocations: 0,
        }
    }

    pub fn deltas(&self) -> &[f32] {
        &self.deltas
    }

    pub fn update_invocations(&self) -> u32 {
        self.deltas.len() as u32
    }

    pub fn render_invocations(&self) -> u32 {
        self.render_invocations
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame for Recorder {
    fn update(&mut self, dt: f32) {
        self.deltas.push(dt);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.render_invocations += 1;
        Ok(())
    }
}

/// Element-wise comparison of two matrices.
pub(crate) fn assert_matrix_eq(actual: cgmath::Matrix4<f32>, expected: cgmath::Matrix4<f32>) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for (c, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        for (r, (a, e)) in a.iter().zip(e.iter()).enumerate() {
            assert!(
                (a - e).abs() < 1e-5,
                "matrix mismatch at column {c}, row {r}: {a} != {e}"
            );
        }
    }
}

/// Encode a solid-colour RGBA PNG in memory.
pub(crate) fn png_bytes(width: u32, height: u32, colour: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(colour));
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .expect("png encoding");
    bytes.into_inner()
}

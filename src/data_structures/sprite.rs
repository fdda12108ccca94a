//! Drawable quads: textured [`Sprite`]s and the flat [`Backdrop`].

use crate::{
    data_structures::{
        quad::{Positions, QuadMesh},
        texture::Texture,
    },
    pipelines::program::{ProgramUniforms, ShaderProgram},
    render::{Flat, Render, Textured},
};

/// A textured quad with its own model matrix.
#[derive(Debug)]
pub struct Sprite {
    pub mesh: QuadMesh,
    pub texture: Texture,
    pub uniforms: ProgramUniforms,
}

impl Sprite {
    pub fn new(
        device: &wgpu::Device,
        program: &ShaderProgram,
        positions: &Positions,
        texture: Texture,
        label: &str,
    ) -> Self {
        Self {
            mesh: QuadMesh::new(device, positions, label),
            texture,
            uniforms: program.uniforms(device, label),
        }
    }

    /// Draw with texture coordinates from `tex_coords`.
    pub fn render<'a>(&'a self, tex_coords: &'a QuadMesh) -> Render<'a> {
        Render::Textured(Textured {
            positions: &self.mesh.buffer,
            tex_coords: &tex_coords.buffer,
            uniforms: &self.uniforms.bind_group,
            texture: &self.texture.bind_group,
            amount: self.mesh.vertex_count,
        })
    }
}

/// An untextured quad filled with the program colour. Its model matrix stays
/// at identity.
#[derive(Debug)]
pub struct Backdrop {
    pub mesh: QuadMesh,
    pub uniforms: ProgramUniforms,
}

impl Backdrop {
    pub fn new(
        device: &wgpu::Device,
        program: &ShaderProgram,
        positions: &Positions,
        label: &str,
    ) -> Self {
        Self {
            mesh: QuadMesh::new(device, positions, label),
            uniforms: program.uniforms(device, label),
        }
    }
}

impl<'a> From<&'a Backdrop> for Render<'a> {
    fn from(backdrop: &'a Backdrop) -> Self {
        Render::Flat(Flat {
            positions: &backdrop.mesh.buffer,
            uniforms: &backdrop.uniforms.bind_group,
            amount: backdrop.mesh.vertex_count,
        })
    }
}

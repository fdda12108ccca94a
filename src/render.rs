//! Draw list composition.
//!
//! This module defines the [`Render`] enum a scene returns each frame to say
//! what to draw. Entries are drawn strictly in the order they appear; there is
//! no depth buffer, so that order is what decides overlap. Entries are never
//! regrouped by program: each one binds its own pipeline before it draws.
//!
//! # Key types
//!
//! - [`Render<'a>`] is the draw list
//! - [`Flat<'a>`] is an untextured quad (position stream only)
//! - [`Textured<'a>`] is a textured quad (position and texture coordinate streams)
//!

use crate::pipelines::program::ShaderProgram;

/// An untextured draw: positions plus the uniform bind group.
#[derive(Clone, Copy, Debug)]
pub struct Flat<'a> {
    pub positions: &'a wgpu::Buffer,
    pub uniforms: &'a wgpu::BindGroup,
    pub amount: u32,
}

/// A textured draw: positions, texture coordinates, uniforms and texture.
#[derive(Clone, Copy, Debug)]
pub struct Textured<'a> {
    pub positions: &'a wgpu::Buffer,
    pub tex_coords: &'a wgpu::Buffer,
    pub uniforms: &'a wgpu::BindGroup,
    pub texture: &'a wgpu::BindGroup,
    pub amount: u32,
}

/// What to draw this frame, back to front.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Flat(Flat)` renders one quad with the untextured program
/// - `Textured(Textured)` renders one quad with the textured program
/// - `Composed(Vec<Render>)` renders each entry in turn
///
#[derive(Debug)]
pub enum Render<'a> {
    None,
    Flat(Flat<'a>),
    Textured(Textured<'a>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Flatten into the sequence of single draws, preserving order.
    pub fn draws(self) -> Vec<Render<'a>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Render<'a>>) {
        match self {
            Render::None => (),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.flatten_into(out)),
            draw => out.push(draw),
        }
    }

    /// Record every draw into `render_pass`.
    pub fn draw(
        self,
        render_pass: &mut wgpu::RenderPass<'_>,
        flat: &ShaderProgram,
        textured: &ShaderProgram,
    ) {
        for draw in self.draws() {
            match draw {
                Render::Flat(quad) => {
                    render_pass.set_pipeline(&flat.pipeline);
                    render_pass.set_bind_group(0, quad.uniforms, &[]);
                    render_pass.set_vertex_buffer(flat.position_attribute, quad.positions.slice(..));
                    render_pass.draw(0..quad.amount, 0..1);
                }
                Render::Textured(quad) => {
                    render_pass.set_pipeline(&textured.pipeline);
                    render_pass.set_bind_group(0, quad.uniforms, &[]);
                    render_pass.set_bind_group(1, quad.texture, &[]);
                    render_pass
                        .set_vertex_buffer(textured.position_attribute, quad.positions.slice(..));
                    render_pass
                        .set_vertex_buffer(textured.tex_coord_attribute, quad.tex_coords.slice(..));
                    render_pass.draw(0..quad.amount, 0..1);
                }
                Render::None | Render::Composed(_) => (),
            }
        }
    }
}

impl<'a> From<Vec<Render<'a>>> for Render<'a> {
    fn from(renders: Vec<Render<'a>>) -> Self {
        Render::Composed(renders)
    }
}

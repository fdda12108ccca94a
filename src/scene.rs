//! The scene: a flat sea, a ship drifting right and optionally a sprite
//! spinning about a fixed pivot.
//!
//! [`Scene`] owns every GPU resource it draws with. They are created once in
//! [`Scene::new`] and released when the scene is dropped.

use crate::{
    animation::Animation,
    config::SceneConfig,
    context::InitContext,
    data_structures::{
        quad::{self, QuadMesh},
        sprite::{Backdrop, Sprite},
        texture::{Texture, texture_bind_group_layout},
    },
    error::AssetLoadError,
    pipelines::program::{ProgramKind, ProgramUniforms, ShaderProgram},
    render::Render,
    resources::{load_program, texture::load_texture},
};

#[derive(Debug)]
pub struct Scene {
    pub untextured: ShaderProgram,
    pub textured: ShaderProgram,
    /// Group 1 of the textured program, shared by every sprite texture.
    pub texture_layout: wgpu::BindGroupLayout,
    pub sea: Backdrop,
    pub ship: Sprite,
    pub spinner: Option<Sprite>,
    pub tex_coords: QuadMesh,
    pub animation: Animation,
}

impl Scene {
    /// Load both programs and all textures, then set the fixed uniforms.
    pub async fn new(ctx: &InitContext, config: &SceneConfig) -> Result<Self, AssetLoadError> {
        let device = &ctx.device;
        let queue = &ctx.queue;
        let shaders = &config.shaders;
        let texture_layout = texture_bind_group_layout(device);

        let (untextured, textured) = futures::try_join!(
            load_program(
                device,
                ctx.format,
                &shaders.flat_vertex,
                &shaders.flat_fragment,
                ProgramKind::Flat,
            ),
            load_program(
                device,
                ctx.format,
                &shaders.textured_vertex,
                &shaders.textured_fragment,
                ProgramKind::Textured(&texture_layout),
            ),
        )?;

        let mut files = vec![config.ship_texture.as_str()];
        if let Some(spinner) = &config.spinner {
            files.push(spinner.texture.as_str());
        }
        let mut textures: Vec<Texture> = futures::future::try_join_all(
            files
                .into_iter()
                .map(|file| load_texture(file, device, queue, &texture_layout)),
        )
        .await?;
        let spinner_texture = (textures.len() > 1).then(|| textures.remove(1));
        let ship_texture = textures.remove(0);

        let mut sea = Backdrop::new(device, &untextured, &quad::SEA, "sea");
        let mut ship = Sprite::new(device, &textured, &quad::SHIP, ship_texture, "ship");
        let mut spinner = spinner_texture
            .map(|texture| Sprite::new(device, &textured, &quad::SPINNER, texture, "spinner"));

        set_fixed_uniforms(queue, config, &mut sea.uniforms, config.sea_colour);
        set_fixed_uniforms(queue, config, &mut ship.uniforms, config.sprite_tint);
        if let Some(spinner) = &mut spinner {
            set_fixed_uniforms(queue, config, &mut spinner.uniforms, config.sprite_tint);
        }

        Ok(Self {
            untextured,
            textured,
            texture_layout,
            sea,
            ship,
            spinner,
            tex_coords: QuadMesh::new(device, &quad::TEX_COORDS, "tex coords"),
            animation: Animation::from_config(config),
        })
    }

    /// Advance the animation and upload both model matrices.
    pub fn update(&mut self, queue: &wgpu::Queue, dt: f32) {
        self.animation.update(dt);
        self.ship
            .uniforms
            .set_model_matrix(queue, self.animation.translate);
        if let Some(spinner) = &mut self.spinner {
            spinner
                .uniforms
                .set_model_matrix(queue, self.animation.rotate);
        }
    }

    /// Sea first, then the spinner, then the ship on top.
    pub fn on_render(&self) -> Render<'_> {
        let mut renders = vec![Render::from(&self.sea)];
        if let Some(spinner) = &self.spinner {
            renders.push(spinner.render(&self.tex_coords));
        }
        renders.push(self.ship.render(&self.tex_coords));
        renders.into()
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        self.on_render()
            .draw(render_pass, &self.untextured, &self.textured);
    }
}

fn set_fixed_uniforms(
    queue: &wgpu::Queue,
    config: &SceneConfig,
    uniforms: &mut ProgramUniforms,
    [r, g, b, a]: [f32; 4],
) {
    uniforms.set_projection_matrix(queue, config.projection.to_matrix());
    uniforms.set_view_matrix(queue, config.view);
    uniforms.set_color(queue, r, g, b, a);
}

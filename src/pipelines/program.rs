//! Shader programs and their per-draw uniforms.
//!
//! A [`ShaderProgram`] is a compiled vertex/fragment pair turned into a render
//! pipeline. It is immutable once built. Matrices and colour are not stored on
//! the program: a render pass only reads uniform buffers at submit time, so
//! every quad drawn with a program owns a [`ProgramUniforms`] and uploads its
//! own values.

use wgpu::util::DeviceExt;

use crate::pipelines::mk_render_pipeline;

/// Vertex buffer slot and shader location of the 2D position stream.
pub const POSITION_ATTRIBUTE: u32 = 0;
/// Vertex buffer slot and shader location of the texture coordinate stream.
pub const TEX_COORD_ATTRIBUTE: u32 = 1;

pub const POSITION_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: POSITION_ATTRIBUTE,
        format: wgpu::VertexFormat::Float32x2,
    }],
};

pub const TEX_COORD_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: TEX_COORD_ATTRIBUTE,
        format: wgpu::VertexFormat::Float32x2,
    }],
};

/// cgmath builds OpenGL clip space (z in -1..1); wgpu wants z in 0..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[derive(Clone, Copy, Debug)]
pub enum ProgramKind<'a> {
    /// Position only, filled with the uniform colour.
    Flat,
    /// Position and texture coordinates, texture sampled and tinted. The
    /// layout is bound at group 1 and owned by the caller.
    Textured(&'a wgpu::BindGroupLayout),
}

/// The uniform block both programs declare at group 0, binding 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl TransformUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        let identity: [[f32; 4]; 4] = cgmath::Matrix4::<f32>::identity().into();
        Self {
            projection: identity,
            view: identity,
            model: identity,
            color: [1.0; 4],
        }
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_layout: wgpu::BindGroupLayout,
    pub position_attribute: u32,
    pub tex_coord_attribute: u32,
}

impl ShaderProgram {
    /// Compile both stages and link them into one pipeline.
    ///
    /// Compilation errors surface through wgpu's uncaptured error handler,
    /// which aborts; there is no recovery path.
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        vertex_source: &str,
        fragment_source: &str,
        kind: ProgramKind<'_>,
    ) -> Self {
        let uniform_layout = uniform_bind_group_layout(device);

        let mut bind_group_layouts = vec![&uniform_layout];
        if let ProgramKind::Textured(texture_layout) = kind {
            bind_group_layouts.push(texture_layout);
        }
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(kind.label()),
            bind_group_layouts: &bind_group_layouts,
            push_constant_ranges: &[],
        });

        let streams = [POSITION_LAYOUT, TEX_COORD_LAYOUT];
        let vertex_layouts = match kind {
            ProgramKind::Flat => &streams[..1],
            ProgramKind::Textured(_) => &streams[..],
        };

        log::debug!("building {} pipeline", kind.label());
        let pipeline = mk_render_pipeline(
            device,
            &layout,
            color_format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            vertex_layouts,
            wgpu::ShaderModuleDescriptor {
                label: Some("vertex shader"),
                source: wgpu::ShaderSource::Wgsl(vertex_source.into()),
            },
            wgpu::ShaderModuleDescriptor {
                label: Some("fragment shader"),
                source: wgpu::ShaderSource::Wgsl(fragment_source.into()),
            },
        );

        Self {
            pipeline,
            uniform_layout,
            position_attribute: POSITION_ATTRIBUTE,
            tex_coord_attribute: TEX_COORD_ATTRIBUTE,
        }
    }

    /// Uniform storage for one more quad drawn with this program.
    pub fn uniforms(&self, device: &wgpu::Device, label: &str) -> ProgramUniforms {
        ProgramUniforms::new(device, &self.uniform_layout, label)
    }
}

impl ProgramKind<'_> {
    fn label(&self) -> &'static str {
        match self {
            ProgramKind::Flat => "untextured program",
            ProgramKind::Textured(_) => "textured program",
        }
    }
}

/// Projection, view, model and colour of one draw.
///
/// Each setter replaces one field and uploads the whole block right away.
#[derive(Debug)]
pub struct ProgramUniforms {
    pub uniform: TransformUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl ProgramUniforms {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let uniform = TransformUniform::new();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(label),
        });
        Self {
            uniform,
            buffer,
            bind_group,
        }
    }

    /// Expects an OpenGL style projection and converts it for wgpu.
    pub fn set_projection_matrix(&mut self, queue: &wgpu::Queue, m: cgmath::Matrix4<f32>) {
        self.uniform.projection = (OPENGL_TO_WGPU_MATRIX * m).into();
        self.upload(queue);
    }

    pub fn set_view_matrix(&mut self, queue: &wgpu::Queue, m: cgmath::Matrix4<f32>) {
        self.uniform.view = m.into();
        self.upload(queue);
    }

    pub fn set_model_matrix(&mut self, queue: &wgpu::Queue, m: cgmath::Matrix4<f32>) {
        self.uniform.model = m.into();
        self.upload(queue);
    }

    pub fn set_color(&mut self, queue: &wgpu::Queue, r: f32, g: f32, b: f32, a: f32) {
        self.uniform.color = [r, g, b, a];
        self.upload(queue);
    }

    fn upload(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

fn uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("transform_bind_group_layout"),
    })
}

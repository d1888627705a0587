use bytemuck::{Pod, Zeroable};
use gridray_render::RenderCommand;
use wgpu::util::DeviceExt;

use crate::shaders;

/// Backdrop clear color: the deep violet behind the wall strips.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 15.0 / 255.0,
    g: 0.0,
    b: 34.0 / 255.0,
    a: 1.0,
};

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct ScreenUniforms {
    // xy = screen size in pixels, zw padding
    size: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct StripVertex {
    position: [f32; 2],
    color: [f32; 3],
}

/// Expand one command into two triangles covering its strip rectangle.
///
/// Pure pixel-space geometry; the shader converts to NDC. Kept free of the
/// GPU types so it can be tested without a device.
fn strip_quad(cmd: &RenderCommand, column_width: f32) -> [StripVertex; 6] {
    let x0 = cmd.column as f32 * column_width;
    let x1 = x0 + column_width;
    // top_y is the numerically larger anchor; order the quad top-down.
    let y0 = cmd.bottom_y.min(cmd.top_y);
    let y1 = cmd.bottom_y.max(cmd.top_y);
    let color = cmd.color.to_f32();

    let v = |x: f32, y: f32| StripVertex {
        position: [x, y],
        color,
    };
    [
        v(x0, y0),
        v(x0, y1),
        v(x1, y0),
        v(x1, y0),
        v(x0, y1),
        v(x1, y1),
    ]
}

/// wgpu strip renderer: draws a frame's commands as abutting vertical
/// quads in pixel space.
pub struct StripRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    max_columns: u32,
    surface_format: wgpu::TextureFormat,
}

impl StripRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        max_columns: u32,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("screen_uniforms"),
            contents: bytemuck::bytes_of(&ScreenUniforms {
                size: [width as f32, height as f32, 0.0, 0.0],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("screen_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("screen_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("strip_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("strip_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::STRIP_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("strip_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_strip"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<StripVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x2,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_strip"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Preallocate six vertices per column.
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("strip_vertex_buffer"),
            size: (max_columns as u64) * 6 * std::mem::size_of::<StripVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        tracing::debug!(max_columns, "strip renderer ready");

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            max_columns,
            surface_format,
        }
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Update the screen-size uniform after a surface resize.
    pub fn resize(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&ScreenUniforms {
                size: [width.max(1) as f32, height.max(1) as f32, 0.0, 0.0],
            }),
        );
    }

    /// Upload and draw one frame of strip commands.
    ///
    /// Commands beyond the preallocated column budget are dropped; the
    /// budget is sized from the render configuration at startup.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        column_width: f32,
        commands: impl Iterator<Item = RenderCommand>,
    ) {
        let mut vertices: Vec<StripVertex> = Vec::with_capacity(self.max_columns as usize * 6);
        for cmd in commands.take(self.max_columns as usize) {
            vertices.extend_from_slice(&strip_quad(&cmd, column_width));
        }

        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("strip_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("strip_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

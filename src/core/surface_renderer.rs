use std::sync::Arc;

use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, RenderPipeline, Surface, SurfaceConfiguration,
    TextureView,
};
use winit::window::Window;

use super::gpu_context::GpuContext;
use crate::camera::PerspectiveCamera;
use crate::scene::{NodeKind, SceneGraph};
use crate::traits::sink::FrameSink;
use crate::types::{AxesVertex, CameraUniform, MeshVertex, ModelUniform};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// GPU-side footprint of one scene node
struct GpuNode {
    kind: NodeKind,
    vertex: Buffer,
    index: Option<Buffer>,
    draw_count: u32,
    uniform: Buffer,
    bind_group: BindGroup,
    color: [f32; 3],
}

/// Draws a scene graph to a window surface.
///
/// One pipeline per topology — triangle list for meshes, line strip for the
/// polyline, line list with vertex colors for the axis indicator — all fed
/// by a camera uniform at group 0 and a per-node model uniform at group 1.
pub struct SurfaceRenderer {
    gpu: GpuContext,
    surface: Option<Surface<'static>>,
    config: SurfaceConfiguration,
    depth_view: TextureView,
    mesh_pipeline: RenderPipeline,
    line_pipeline: RenderPipeline,
    axes_pipeline: RenderPipeline,
    camera_buffer: Buffer,
    camera_bind_group: BindGroup,
    model_layout: BindGroupLayout,
    nodes: Vec<GpuNode>,
}

impl SurfaceRenderer {
    pub fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;
        let gpu = pollster::block_on(GpuContext::new_with_surface(&instance, &surface))?;

        let surface_caps = surface.get_capabilities(gpu.adapter());
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);

        let depth_view = Self::create_depth_texture(gpu.device(), size.width, size.height);

        let shader = gpu
            .device()
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Beam Shader"),
                source: wgpu::ShaderSource::Wgsl(include_str!("../beam.wgsl").into()),
            });

        let camera_layout =
            gpu.device()
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Camera Bind Group Layout"),
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

        let model_layout =
            gpu.device()
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Model Bind Group Layout"),
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
                });

        let pipeline_layout =
            gpu.device()
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Beam Pipeline Layout"),
                    bind_group_layouts: &[&camera_layout, &model_layout],
                    push_constant_ranges: &[],
                });

        let mesh_pipeline = Self::create_pipeline(
            gpu.device(),
            &pipeline_layout,
            &shader,
            surface_format,
            "Mesh Pipeline",
            ("vs_main", "fs_main"),
            MeshVertex::layout(),
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = Self::create_pipeline(
            gpu.device(),
            &pipeline_layout,
            &shader,
            surface_format,
            "Line Pipeline",
            ("vs_main", "fs_main"),
            MeshVertex::layout(),
            wgpu::PrimitiveTopology::LineStrip,
        );
        let axes_pipeline = Self::create_pipeline(
            gpu.device(),
            &pipeline_layout,
            &shader,
            surface_format,
            "Axes Pipeline",
            ("vs_axes", "fs_axes"),
            AxesVertex::layout(),
            wgpu::PrimitiveTopology::LineList,
        );

        let camera_buffer = gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[CameraUniform {
                    view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                }]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let camera_bind_group = gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            gpu,
            surface: Some(surface),
            config,
            depth_view,
            mesh_pipeline,
            line_pipeline,
            axes_pipeline,
            camera_buffer,
            camera_bind_group,
            model_layout,
            nodes: Vec::new(),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    fn create_depth_texture(device: &Device, width: u32, height: u32) -> TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    #[allow(clippy::too_many_arguments)]
    fn create_pipeline(
        device: &Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        label: &str,
        entries: (&'static str, &'static str),
        vertex_layout: wgpu::VertexBufferLayout<'static>,
        topology: wgpu::PrimitiveTopology,
    ) -> RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(entries.0),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(entries.1),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn upload_node(&self, node: &crate::scene::SceneNode) -> GpuNode {
        let geometry = node.geometry.borrow();
        let device = self.gpu.device();

        let (vertex, index, draw_count) = match node.kind {
            NodeKind::Axes => {
                let vertices: Vec<AxesVertex> = geometry
                    .positions()
                    .iter()
                    .zip(geometry.colors())
                    .map(|(p, c)| AxesVertex {
                        position: *p,
                        color: *c,
                    })
                    .collect();
                let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(node.name),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                (vertex, None, vertices.len() as u32)
            }
            NodeKind::Mesh | NodeKind::Line => {
                let vertices: Vec<MeshVertex> = geometry
                    .positions()
                    .iter()
                    .map(|p| MeshVertex { position: *p })
                    .collect();
                let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(node.name),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                if geometry.indices().is_empty() {
                    (vertex, None, vertices.len() as u32)
                } else {
                    let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some(node.name),
                        contents: bytemuck::cast_slice(geometry.indices()),
                        usage: wgpu::BufferUsages::INDEX,
                    });
                    (vertex, Some(index), geometry.indices().len() as u32)
                }
            }
        };

        let color = node
            .material
            .as_ref()
            .map(|m| m.borrow().color())
            .unwrap_or([1.0, 1.0, 1.0]);

        let uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(node.name),
            contents: bytemuck::cast_slice(&[ModelUniform::new(node.model_matrix(), color)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(node.name),
            layout: &self.model_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });

        GpuNode {
            kind: node.kind,
            vertex,
            index,
            draw_count,
            uniform,
            bind_group,
            color,
        }
    }
}

impl FrameSink for SurfaceRenderer {
    fn register_scene(&mut self, scene: &SceneGraph) {
        self.nodes = scene.nodes().iter().map(|n| self.upload_node(n)).collect();
        log::debug!("uploaded {} nodes to the GPU", self.nodes.len());
    }

    fn submit(&mut self, scene: &SceneGraph, camera: &PerspectiveCamera) -> Result<()> {
        let surface = self.surface.as_ref().ok_or("surface already released")?;
        let queue = self.gpu.queue();

        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
        );
        for (node, gpu) in scene.nodes().iter().zip(&self.nodes) {
            queue.write_buffer(
                &gpu.uniform,
                0,
                bytemuck::cast_slice(&[ModelUniform::new(node.model_matrix(), gpu.color)]),
            );
        }

        let frame = surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.gpu
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            for gpu in &self.nodes {
                match gpu.kind {
                    NodeKind::Mesh => pass.set_pipeline(&self.mesh_pipeline),
                    NodeKind::Line => pass.set_pipeline(&self.line_pipeline),
                    NodeKind::Axes => pass.set_pipeline(&self.axes_pipeline),
                }
                pass.set_bind_group(1, &gpu.bind_group, &[]);
                pass.set_vertex_buffer(0, gpu.vertex.slice(..));
                match &gpu.index {
                    Some(index) => {
                        pass.set_index_buffer(index.slice(..), wgpu::IndexFormat::Uint32);
                        pass.draw_indexed(0..gpu.draw_count, 0, 0..1);
                    }
                    None => pass.draw(0..gpu.draw_count, 0..1),
                }
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }

    fn dispose(&mut self) {
        for gpu in &self.nodes {
            gpu.vertex.destroy();
            if let Some(index) = &gpu.index {
                index.destroy();
            }
            gpu.uniform.destroy();
        }
        self.nodes.clear();
        self.camera_buffer.destroy();

        // Dropping the surface releases the rendering context
        self.surface = None;
        log::debug!("renderer disposed");
    }
}

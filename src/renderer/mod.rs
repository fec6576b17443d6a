pub mod atlas;
pub mod pipeline;
pub mod text;

use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use atlas::Atlas;
use pipeline::{QuadPipeline, QuadVertex, create_quad_pipeline, orthographic_projection};

use crate::error::RenderError;

pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: QuadPipeline,
    /// Fixed logical-resolution projection; the window scales, coordinates don't.
    projection_bind_group: wgpu::BindGroup,
    atlas_bind_group: wgpu::BindGroup,
    atlas: Atlas,
    // ── Frame vertex buffer (persistent, invalidated by FNV hash) ─────────
    vertex_buffer: Option<wgpu::Buffer>,
    /// Number of QuadVertex slots the current vertex_buffer can hold.
    vertex_buffer_capacity: u32,
    /// FNV-1a hash of the last uploaded vertex bytes; used to skip redundant
    /// write_buffer calls on frames that did not change (e.g. pause overlay).
    vertex_hash: u64,
}

/// FNV-1a 64-bit hash, used to detect unchanged vertex data.
fn fnv1a_64(data: &[u8]) -> u64 {
    data.iter().fold(14695981039346656037u64, |h, &b| {
        h.wrapping_mul(1099511628211) ^ b as u64
    })
}

impl Renderer {
    /// Create the surface, device and quad pipeline for `window`.
    ///
    /// `logical_size` is the coordinate space game code draws in. `font_atlas`
    /// is optional: without it text quads sample a blank texel and are skipped
    /// upstream anyway.
    pub async fn new(
        window: Arc<Window>,
        logical_size: [f32; 2],
        font_atlas: Option<&image::RgbaImage>,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_quad_pipeline(&device, format);

        let proj = orthographic_projection(logical_size[0], logical_size[1]);
        let projection_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("projection_buffer"),
            contents: bytemuck::cast_slice(&proj),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("projection_bg"),
            layout: &pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        let atlas = match font_atlas {
            Some(img) => Atlas::from_rgba(&device, &queue, img),
            None => Atlas::blank(&device, &queue),
        };

        let atlas_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("atlas_bg"),
            layout: &pipeline.atlas_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&atlas.texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&atlas.sampler),
                },
            ],
        });

        tracing::info!(
            "renderer ready: {}x{} surface, {:?}, atlas {}x{}",
            config.width, config.height, format, atlas.width, atlas.height
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            projection_bind_group,
            atlas_bind_group,
            atlas,
            vertex_buffer: None,
            vertex_buffer_capacity: 0,
            vertex_hash: 0,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Physical surface size in pixels.
    pub fn surface_size(&self) -> [u32; 2] {
        [self.config.width, self.config.height]
    }

    /// Render one frame: clear to black, then draw `vertices` in order.
    ///
    /// Submission order is paint order, so the fade overlay (pushed last by the
    /// play scene) covers everything drawn before it.
    pub fn render(&mut self, vertices: &[QuadVertex]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if !vertices.is_empty() {
            let bytes: &[u8] = bytemuck::cast_slice(vertices);
            let new_hash = fnv1a_64(bytes);
            let new_count = vertices.len() as u32;

            if new_count > self.vertex_buffer_capacity || self.vertex_buffer.is_none() {
                // Grow the buffer (next power-of-two, min 1024 vertices).
                let capacity = new_count.next_power_of_two().max(1024);
                self.vertex_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("quad_vertex_buffer"),
                    size: capacity as u64 * std::mem::size_of::<QuadVertex>() as u64,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                }));
                self.vertex_buffer_capacity = capacity;
                self.vertex_hash = !new_hash; // Force upload on resize.
            }

            if new_hash != self.vertex_hash {
                if let Some(buf) = &self.vertex_buffer {
                    self.queue.write_buffer(buf, 0, bytes);
                }
                self.vertex_hash = new_hash;
            }
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let (false, Some(buf)) = (vertices.is_empty(), &self.vertex_buffer) {
                let count = vertices.len() as u32;
                let byte_len = count as u64 * std::mem::size_of::<QuadVertex>() as u64;
                pass.set_pipeline(&self.pipeline.render_pipeline);
                pass.set_bind_group(0, &self.projection_bind_group, &[]);
                pass.set_bind_group(1, &self.atlas_bind_group, &[]);
                pass.set_vertex_buffer(0, buf.slice(..byte_len));
                pass.draw(0..count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

use wgpu::util::DeviceExt;

/// GPU copy of the font atlas. A 1×1 opaque white texel stands in when no
/// font could be loaded, so the pipeline layout never changes.
pub struct Atlas {
    pub texture_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Atlas {
    pub fn from_rgba(device: &wgpu::Device, queue: &wgpu::Queue, img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::upload(device, queue, width, height, img.as_raw())
    }

    pub fn blank(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::upload(device, queue, 1, 1, &[0xFF, 0xFF, 0xFF, 0xFF])
    }

    fn upload(device: &wgpu::Device, queue: &wgpu::Queue, width: u32, height: u32, rgba: &[u8]) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("font_atlas"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            rgba,
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self { texture_view, sampler, width, height }
    }
}

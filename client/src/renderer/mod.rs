pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::mesh::{create_quad, Mesh};
use crate::scene::Scene;
use game_core::Arena;
use resources::GameBuffers;
use wgpu::*;
use winit::window::Window;

pub use resources::InstanceData;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub quad: Mesh,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, arena: Arena) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::screen(arena.width as f32, arena.height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let quad_pipeline = pipeline::QuadPipeline::new(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_quad();
        let quad = Mesh::new(&ctx.device, &ctx.queue, &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &quad_pipeline.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            pipeline: quad_pipeline.pipeline,
            camera_bind_group,
            buffers,
            quad,
        })
    }

    /// Reconfigure the surface; the camera keeps mapping the arena onto it
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> anyhow::Result<()> {
        draw::draw_frame(self, scene)
    }
}

use super::Renderer;
use crate::scene::Scene;
use anyhow::anyhow;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> anyhow::Result<()> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("Surface lost or outdated, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Timed out waiting for the next surface texture");
            return Ok(());
        }
        Err(e) => return Err(anyhow!("Failed to get current texture: {e}")),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    renderer
        .buffers
        .instances
        .upload(&renderer.device, &renderer.queue, &scene.instances);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let [r, g, b, a] = scene.background;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_instances(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_instances(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    let instances = &renderer.buffers.instances;
    if instances.len == 0 {
        return;
    }

    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, instances.buffer.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..instances.len);
}

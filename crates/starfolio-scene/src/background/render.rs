/// One point cloud ready to draw
pub struct CloudDraw<'a> {
    pub instances: &'a wgpu::Buffer,
    pub material: &'a wgpu::BindGroup,
    pub count: u32,
}

/// Clear to transparent and draw each cloud in order
pub fn render_clouds(
    encoder: &mut wgpu::CommandEncoder,
    pipeline: &wgpu::RenderPipeline,
    scene_bind_group: &wgpu::BindGroup,
    output_view: &wgpu::TextureView,
    clouds: &[CloudDraw<'_>],
) {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Starfield Render Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: output_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    render_pass.set_pipeline(pipeline);
    render_pass.set_bind_group(0, scene_bind_group, &[]);
    for cloud in clouds {
        if cloud.count == 0 {
            continue;
        }
        render_pass.set_bind_group(1, cloud.material, &[]);
        render_pass.set_vertex_buffer(0, cloud.instances.slice(..));
        render_pass.draw(0..6, 0..cloud.count);
    }
}

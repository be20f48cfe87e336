use super::helpers;
use crate::core::{MorphTargets, ParticleUniforms, ParticleVertex};

const QUAD_VERTICES: u32 = 6;

/// Instanced particle quads. Static attributes and shape-major morph targets
/// are uploaded once at mount; only the field uniforms change per frame.
pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    _target_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    camera_buffer: &wgpu::Buffer,
    targets: &MorphTargets,
    color_format: wgpu::TextureFormat,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX),
            helpers::uniform_entry(1, wgpu::ShaderStages::VERTEX),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let attributes = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3];
    let layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &attributes,
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particles_pipeline",
        &pl,
        &shader,
        "vs_particles",
        "fs_particles",
        &[layout],
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
        helpers::ADDITIVE,
    );

    let vertices = targets.particle_vertices();
    let vertex_buffer = helpers::init_buffer(
        device,
        "particle_vertices",
        bytemuck::cast_slice(&vertices),
        wgpu::BufferUsages::VERTEX,
    );
    let packed = targets.packed_targets();
    let target_buffer = helpers::init_buffer(
        device,
        "morph_targets",
        bytemuck::cast_slice(&packed),
        wgpu::BufferUsages::STORAGE,
    );
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "particle_uniforms",
        std::mem::size_of::<ParticleUniforms>(),
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: target_buffer.as_entire_binding(),
            },
        ],
    });
    log::info!(
        "[render] particles={} morph_targets={}",
        vertices.len(),
        packed.len()
    );

    ParticleResources {
        pipeline,
        vertex_buffer,
        _target_buffer: target_buffer,
        uniform_buffer,
        bind_group,
        instance_count: vertices.len() as u32,
    }
}

impl ParticleResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ParticleUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..QUAD_VERTICES, 0..self.instance_count);
    }
}

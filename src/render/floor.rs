use super::helpers;
use crate::constants::{ACCENT_COLOR, GRID_COLOR, RING_COLOR, TILE_SIZE};
use crate::core::{BackgroundRing, GridFloor, GridTransform, TileInstance};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 3],
    // x = opacity, y = 1 when the vertex follows the grid offset
    params: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FloorUniforms {
    offset: [f32; 4],
    grid_color: [f32; 4],
    ring_color: [f32; 4],
    accent: [f32; 4],
    params: [f32; 4],
}

/// Grid lines and background rings share one line list; tiles are instanced
/// quads rewritten every frame.
pub(crate) struct FloorResources {
    line_pipeline: wgpu::RenderPipeline,
    tile_pipeline: wgpu::RenderPipeline,
    line_buffer: wgpu::Buffer,
    line_vertex_count: u32,
    tile_buffer: wgpu::Buffer,
    tile_capacity: usize,
    tile_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

fn line_vertices(grid: &GridFloor, rings: &[BackgroundRing]) -> Vec<LineVertex> {
    let mut out = Vec::with_capacity(grid.segments().len() * 2);
    for [a, b] in grid.segments() {
        for p in [a, b] {
            out.push(LineVertex {
                position: p.to_array(),
                params: [1.0, 1.0],
            });
        }
    }
    for ring in rings {
        for [a, b] in ring.segments() {
            for p in [a, b] {
                out.push(LineVertex {
                    position: p.to_array(),
                    params: [ring.opacity, 0.0],
                });
            }
        }
    }
    out
}

pub(crate) fn create_floor_resources(
    device: &wgpu::Device,
    camera_buffer: &wgpu::Buffer,
    grid: &GridFloor,
    tile_capacity: usize,
    color_format: wgpu::TextureFormat,
) -> FloorResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("floor_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::FLOOR_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("floor_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX),
            helpers::uniform_entry(1, wgpu::ShaderStages::VERTEX),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("floor_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let line_attrs = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
    let line_pipeline = helpers::make_scene_pipeline(
        device,
        "floor_lines",
        &pl,
        &shader,
        "vs_lines",
        "fs_lines",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &line_attrs,
        }],
        wgpu::PrimitiveTopology::LineList,
        color_format,
        wgpu::BlendState::ALPHA_BLENDING,
    );
    let tile_attrs = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32,
        2 => Float32x2,
        3 => Float32
    ];
    let tile_pipeline = helpers::make_scene_pipeline(
        device,
        "floor_tiles",
        &pl,
        &shader,
        "vs_tiles",
        "fs_tiles",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &tile_attrs,
        }],
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
        wgpu::BlendState::ALPHA_BLENDING,
    );

    let lines = line_vertices(grid, &BackgroundRing::default_set());
    let line_buffer = helpers::init_buffer(
        device,
        "floor_lines",
        bytemuck::cast_slice(&lines),
        wgpu::BufferUsages::VERTEX,
    );
    let tile_capacity = tile_capacity.max(1);
    let tile_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("floor_tiles"),
        size: (tile_capacity * std::mem::size_of::<TileInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_buffer =
        helpers::uniform_buffer(device, "floor_uniforms", std::mem::size_of::<FloorUniforms>());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("floor_bg"),
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
        ],
    });

    FloorResources {
        line_pipeline,
        tile_pipeline,
        line_buffer,
        line_vertex_count: lines.len() as u32,
        tile_buffer,
        tile_capacity,
        tile_count: 0,
        uniform_buffer,
        bind_group,
    }
}

impl FloorResources {
    pub(crate) fn write(&mut self, queue: &wgpu::Queue, grid: &GridTransform, tiles: &[TileInstance]) {
        let rgb = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        let u = FloorUniforms {
            offset: [grid.offset.x, grid.offset.y, grid.offset.z, grid.opacity],
            grid_color: rgb(GRID_COLOR),
            ring_color: rgb(RING_COLOR),
            accent: rgb(ACCENT_COLOR),
            params: [TILE_SIZE, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
        let n = tiles.len().min(self.tile_capacity);
        if n > 0 {
            queue.write_buffer(&self.tile_buffer, 0, bytemuck::cast_slice(&tiles[..n]));
        }
        self.tile_count = n as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_pipeline(&self.line_pipeline);
        rpass.set_vertex_buffer(0, self.line_buffer.slice(..));
        rpass.draw(0..self.line_vertex_count, 0..1);
        if self.tile_count > 0 {
            rpass.set_pipeline(&self.tile_pipeline);
            rpass.set_vertex_buffer(0, self.tile_buffer.slice(..));
            rpass.draw(0..6, 0..self.tile_count);
        }
    }
}
